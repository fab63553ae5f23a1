//! A single gated voice that renders one quiz note.
//!
//! The voice holds the note for `note_seconds`, then lets the envelope
//! release on its own. Triggering a new note supersedes the old one: the
//! envelope restarts from zero, so there is never more than one pitch sounding.

use crate::catalog::Note;
use crate::dsp::{Envelope, Oscillator, RenderCtx, Waveform};

/// Sound design for the quiz tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSettings {
    pub waveform: Waveform,
    /// Octave the pitch class is rendered in (4 = middle C octave).
    pub octave: u8,
    /// Output gain, 0.0-1.0.
    pub volume: f32,
    /// How long the note is held before release starts.
    pub note_seconds: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            waveform: Waveform::Triangle,
            octave: 4,
            volume: 0.5,
            note_seconds: 1.0,
        }
    }
}

// Soft attack, gentle settle, long enough tail to hear the pitch decay
const ATTACK: f32 = 0.01;
const DECAY: f32 = 0.15;
const SUSTAIN: f32 = 0.7;
const RELEASE: f32 = 0.3;

pub struct ToneVoice {
    settings: VoiceSettings,
    sample_rate: f32,
    osc: Oscillator,
    env: Envelope,
    ctx: RenderCtx,
    note: Option<Note>,
    /// Samples left before the gate closes
    gate_remaining: u32,
}

impl ToneVoice {
    pub fn new(settings: VoiceSettings, sample_rate: f32) -> Self {
        Self {
            settings,
            sample_rate,
            osc: Oscillator::new(settings.waveform),
            env: Envelope::adsr(ATTACK, DECAY, SUSTAIN, RELEASE),
            ctx: RenderCtx::from_freq(sample_rate, 440.0),
            note: None,
            gate_remaining: 0,
        }
    }

    /// Start `note`, cutting off anything already sounding.
    pub fn trigger(&mut self, note: Note) {
        self.ctx = RenderCtx::from_note(self.sample_rate, note.midi(self.settings.octave));
        self.note = Some(note);
        self.gate_remaining = (self.settings.note_seconds.max(0.0) * self.sample_rate) as u32;
        self.osc.reset();
        self.env.note_on(&self.ctx);
    }

    /// Silence immediately.
    pub fn stop(&mut self) {
        self.env.reset();
        self.note = None;
        self.gate_remaining = 0;
    }

    /// Render one block into `out`, overwriting it.
    pub fn render(&mut self, out: &mut [f32]) {
        if !self.env.is_active() {
            out.fill(0.0);
            self.note = None;
            return;
        }

        self.osc.render(out, &self.ctx);

        // Close the gate partway through the block if it expires here
        let held = (self.gate_remaining as usize).min(out.len());
        let (gated, released) = out.split_at_mut(held);
        self.env.apply(gated, &self.ctx);
        self.gate_remaining -= held as u32;
        if !released.is_empty() {
            self.env.note_off(&self.ctx);
            self.env.apply(released, &self.ctx);
        }

        for sample in out.iter_mut() {
            *sample *= self.settings.volume;
        }
    }

    pub fn is_active(&self) -> bool {
        self.env.is_active()
    }

    /// Note currently sounding, if any.
    pub fn note(&self) -> Option<Note> {
        self.note
    }

    pub fn frequency(&self) -> f32 {
        self.ctx.frequency
    }
}
