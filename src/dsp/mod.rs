//! Low-level DSP primitives used to synthesize the quiz notes.
//!
//! These components are allocation-free and realtime-safe, so they can live
//! directly inside the audio callback. They only do the signal math; note
//! timing and message handling sit one layer up in [`crate::synth`].

/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// Phase-accumulator oscillator.
pub mod oscillator;

pub use envelope::{Envelope, EnvelopeStage};
pub use oscillator::{Oscillator, Waveform};

use crate::catalog::midi_note_to_freq;

/// Smallest stage duration, one sample at 48kHz.
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;

/// Context passed to DSP blocks while rendering
///
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch to render (Hz)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
}

impl RenderCtx {
    /// Create context from a MIDI note number
    pub fn from_note(sample_rate: f32, note: u8) -> Self {
        Self {
            sample_rate,
            frequency: midi_note_to_freq(note),
        }
    }

    /// Create context from a direct frequency
    pub fn from_freq(sample_rate: f32, frequency: f32) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }
}
