//! Where quiz sounds come from.
//!
//! Either every note is synthesized on the fly, or each note is resolved to a
//! bundled WAV file by name: `<sound_dir>/<resource_name>.wav`. Assets are
//! decoded, mixed to mono and resampled to the device rate up front so the
//! audio callback only ever copies samples.

use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::catalog::{Note, NOTE_COUNT};
use crate::error::{Error, Result};
use crate::synth::VoiceSettings;

/// Sound source for all twelve notes.
pub enum SoundBank {
    /// Render each note with a [`crate::synth::ToneVoice`].
    Synth(VoiceSettings),
    /// Pre-decoded mono samples, indexed by semitone. `None` plays nothing.
    Samples(Vec<Option<Vec<f32>>>),
}

impl SoundBank {
    /// Resolve every note in `dir` at `sample_rate`.
    ///
    /// Missing or unreadable assets are logged and left silent.
    pub fn load_dir(dir: &Path, sample_rate: f32) -> Self {
        let samples = Note::all()
            .iter()
            .map(|note| {
                let path = dir.join(format!("{}.wav", note.resource_name()));
                if !path.exists() {
                    log::warn!(target: "audio", "no asset for {note} at {}", path.display());
                    return None;
                }
                match load_wav(&path, sample_rate) {
                    Ok(data) => Some(data),
                    Err(e) => {
                        log::warn!(target: "audio", "skipping asset for {note}: {e}");
                        None
                    }
                }
            })
            .collect();

        SoundBank::Samples(samples)
    }

    /// Number of notes that will actually produce sound.
    pub fn playable_notes(&self) -> usize {
        match self {
            SoundBank::Synth(_) => NOTE_COUNT,
            SoundBank::Samples(samples) => samples.iter().filter(|s| s.is_some()).count(),
        }
    }
}

/// Decode a WAV file to mono f32 at `target_rate`.
pub fn load_wav(path: &Path, target_rate: f32) -> Result<Vec<f32>> {
    let wav_err = |source| Error::Wav {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = WavReader::open(path).map_err(wav_err)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(wav_err)?,
        SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(wav_err)?
        }
    };

    let mono = mix_to_mono(&interleaved, spec.channels as usize);
    Ok(resample(&mono, spec.sample_rate as f32, target_rate))
}

fn mix_to_mono(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Linear-interpolation resampler. Good enough for short one-shot notes.
fn resample(input: &[f32], from_rate: f32, to_rate: f32) -> Vec<f32> {
    if input.is_empty() || (from_rate - to_rate).abs() < f32::EPSILON {
        return input.to_vec();
    }

    let ratio = from_rate / to_rate;
    let out_len = ((input.len() as f32) / ratio).floor() as usize;
    (0..out_len)
        .map(|i| {
            let pos = i as f32 * ratio;
            let idx = pos as usize;
            let frac = pos - idx as f32;
            let a = input[idx];
            let b = input.get(idx + 1).copied().unwrap_or(a);
            a + (b - a) * frac
        })
        .collect()
}
