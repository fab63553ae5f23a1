use rtrb::Consumer;

use crate::{
    audio::assets::SoundBank,
    catalog::{Note, NOTE_COUNT},
    synth::{PlayerMessage, ToneVoice},
};

/*
Audio-thread Playback
=====================

Playback lives inside the output callback. It owns everything it touches,
so rendering never locks or allocates:

  1. Drain pending PlayerMessages from the ring buffer
  2. Render the current sound (if any) into the output block

Supersede rule: at most one sound at a time. `Play` stops whatever is
sounding and starts the new note from the top. `Stop` just silences.

    Play(C) ──→ [C sounding] ──Play(E)──→ [E sounding] ──Stop──→ [silent]
*/

enum Source {
    Synth(ToneVoice),
    Samples {
        bank: Vec<Option<Vec<f32>>>,
        /// (semitone, read position) of the sample being played
        cursor: Option<(usize, usize)>,
    },
}

pub struct Playback {
    rx: Consumer<PlayerMessage>,
    source: Source,
    now_playing: Option<Note>,
}

impl Playback {
    pub fn new(bank: SoundBank, sample_rate: f32, rx: Consumer<PlayerMessage>) -> Self {
        let source = match bank {
            SoundBank::Synth(settings) => Source::Synth(ToneVoice::new(settings, sample_rate)),
            SoundBank::Samples(mut bank) => {
                bank.resize(NOTE_COUNT, None);
                Source::Samples { bank, cursor: None }
            }
        };

        Self {
            rx,
            source,
            now_playing: None,
        }
    }

    /// Note currently producing sound, if any.
    pub fn now_playing(&self) -> Option<Note> {
        self.now_playing
    }

    /// Process pending messages, then render one mono block into `out`.
    pub fn render_block(&mut self, out: &mut [f32]) {
        while let Ok(msg) = self.rx.pop() {
            self.handle(msg);
        }

        match &mut self.source {
            Source::Synth(voice) => {
                voice.render(out);
                if !voice.is_active() {
                    self.now_playing = None;
                }
            }
            Source::Samples { bank, cursor } => {
                out.fill(0.0);
                let Some((idx, pos)) = *cursor else {
                    return;
                };

                // A cursor only exists for notes that resolved to data
                let data = bank[idx].as_deref().unwrap_or(&[]);
                let remaining = &data[pos.min(data.len())..];
                let n = remaining.len().min(out.len());
                out[..n].copy_from_slice(&remaining[..n]);

                if pos + n >= data.len() {
                    *cursor = None;
                    self.now_playing = None;
                } else {
                    *cursor = Some((idx, pos + n));
                }
            }
        }
    }

    fn handle(&mut self, msg: PlayerMessage) {
        // Stop first in both cases: a new Play supersedes the old sound
        self.stop();

        if let PlayerMessage::Play(note) = msg {
            let idx = note.semitone() as usize;
            match &mut self.source {
                Source::Synth(voice) => {
                    voice.trigger(note);
                    self.now_playing = Some(note);
                }
                Source::Samples { bank, cursor } => {
                    // Unresolved assets play nothing
                    if bank[idx].is_some() {
                        *cursor = Some((idx, 0));
                        self.now_playing = Some(note);
                    }
                }
            }
        }
    }

    fn stop(&mut self) {
        match &mut self.source {
            Source::Synth(voice) => voice.stop(),
            Source::Samples { cursor, .. } => *cursor = None,
        }
        self.now_playing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::VoiceSettings;
    use rtrb::RingBuffer;

    const SAMPLE_RATE: f32 = 8_000.0;

    fn peak(buffer: &[f32]) -> f32 {
        buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    fn sample_bank() -> SoundBank {
        let mut bank = vec![None; NOTE_COUNT];
        bank[Note::C.semitone() as usize] = Some(vec![0.5; 100]);
        bank[Note::E.semitone() as usize] = Some(vec![-0.25; 100]);
        SoundBank::Samples(bank)
    }

    #[test]
    fn silent_without_requests() {
        let (_tx, rx) = RingBuffer::<PlayerMessage>::new(8);
        let mut playback = Playback::new(SoundBank::Synth(VoiceSettings::default()), SAMPLE_RATE, rx);
        let mut buffer = vec![1.0f32; 256];
        playback.render_block(&mut buffer);
        assert_eq!(peak(&buffer), 0.0);
    }

    #[test]
    fn synth_plays_requested_note() {
        let (mut tx, rx) = RingBuffer::<PlayerMessage>::new(8);
        let mut playback = Playback::new(SoundBank::Synth(VoiceSettings::default()), SAMPLE_RATE, rx);

        tx.push(PlayerMessage::Play(Note::A)).unwrap();
        let mut buffer = vec![0.0f32; 512];
        playback.render_block(&mut buffer);

        assert_eq!(playback.now_playing(), Some(Note::A));
        assert!(peak(&buffer) > 0.1);
    }

    #[test]
    fn new_play_supersedes_current() {
        let (mut tx, rx) = RingBuffer::<PlayerMessage>::new(8);
        let mut playback = Playback::new(sample_bank(), SAMPLE_RATE, rx);

        tx.push(PlayerMessage::Play(Note::C)).unwrap();
        let mut buffer = vec![0.0f32; 10];
        playback.render_block(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.5));

        tx.push(PlayerMessage::Play(Note::E)).unwrap();
        playback.render_block(&mut buffer);
        assert_eq!(playback.now_playing(), Some(Note::E));
        assert!(buffer.iter().all(|&s| s == -0.25));
    }

    #[test]
    fn stop_silences() {
        let (mut tx, rx) = RingBuffer::<PlayerMessage>::new(8);
        let mut playback = Playback::new(SoundBank::Synth(VoiceSettings::default()), SAMPLE_RATE, rx);

        tx.push(PlayerMessage::Play(Note::G)).unwrap();
        tx.push(PlayerMessage::Stop).unwrap();
        let mut buffer = vec![1.0f32; 256];
        playback.render_block(&mut buffer);

        assert_eq!(playback.now_playing(), None);
        assert_eq!(peak(&buffer), 0.0);
    }

    #[test]
    fn missing_sample_plays_nothing() {
        let (mut tx, rx) = RingBuffer::<PlayerMessage>::new(8);
        let mut playback = Playback::new(sample_bank(), SAMPLE_RATE, rx);

        tx.push(PlayerMessage::Play(Note::B)).unwrap();
        let mut buffer = vec![1.0f32; 16];
        playback.render_block(&mut buffer);

        assert_eq!(playback.now_playing(), None);
        assert_eq!(peak(&buffer), 0.0);
    }

    #[test]
    fn sample_ends_and_frees() {
        let (mut tx, rx) = RingBuffer::<PlayerMessage>::new(8);
        let mut playback = Playback::new(sample_bank(), SAMPLE_RATE, rx);

        tx.push(PlayerMessage::Play(Note::C)).unwrap();
        let mut buffer = vec![0.0f32; 64];
        playback.render_block(&mut buffer);
        playback.render_block(&mut buffer);

        // 100 samples: second block holds the last 36, then silence
        assert_eq!(buffer[35], 0.5);
        assert_eq!(buffer[36], 0.0);
        assert_eq!(playback.now_playing(), None);
    }
}
