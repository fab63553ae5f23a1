//! cpal-backed [`SoundPlayer`].

use std::path::Path;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};

use crate::{
    audio::{assets::SoundBank, playback::Playback, SoundPlayer},
    catalog::Note,
    error::{Error, Result},
    synth::{PlayerMessage, VoiceSettings},
    MAX_BLOCK_SIZE,
};

const PLAYER_QUEUE_SIZE: usize = 16;

/// Plays notes on the default output device.
///
/// Requests are pushed onto a lock-free queue and picked up by the audio
/// callback at the start of its next block; the caller never waits.
pub struct CpalPlayer {
    tx: Producer<PlayerMessage>,
    sample_rate: f32,
    // Dropping the stream stops the device
    _stream: cpal::Stream,
}

impl CpalPlayer {
    /// Open the default device. Notes are synthesized with `voice`, or read
    /// from `<sound_dir>/<resource_name>.wav` when a directory is given.
    pub fn open(voice: VoiceSettings, sound_dir: Option<&Path>) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(Error::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        log::info!(
            target: "audio",
            "output {} @ {} Hz, {} channels",
            device.name().unwrap_or_else(|_| "<unknown>".into()),
            sample_rate,
            channels
        );

        let bank = match sound_dir {
            Some(dir) => SoundBank::load_dir(dir, sample_rate),
            None => SoundBank::Synth(voice),
        };
        log::debug!(target: "audio", "{} of 12 notes playable", bank.playable_notes());

        let (tx, rx) = RingBuffer::<PlayerMessage>::new(PLAYER_QUEUE_SIZE);
        let mut playback = Playback::new(bank, sample_rate, rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames];
                    playback.render_block(block);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames;
                }
            },
            |err| log::error!(target: "audio", "stream error: {err}"),
            None,
        )?;

        stream.play()?;

        Ok(Self {
            tx,
            sample_rate,
            _stream: stream,
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn send(&mut self, msg: PlayerMessage) {
        if self.tx.push(msg).is_err() {
            log::warn!(target: "audio", "player queue full, dropping {msg:?}");
        }
    }
}

impl SoundPlayer for CpalPlayer {
    fn play_note(&mut self, note: Note) {
        log::debug!(target: "audio", "play {note}");
        self.send(PlayerMessage::Play(note));
    }

    fn release(&mut self) {
        self.send(PlayerMessage::Stop);
    }
}
