//! Sound playback for quiz notes.
//!
//! The game only ever talks to a [`SoundPlayer`]: a fire-and-forget sink for
//! "play this note" requests. Nothing is returned and nothing can fail from the
//! caller's point of view; problems are logged where they happen and the worst
//! outcome is a missing sound.
//!
//! ```text
//!   RoundController ──play_note──→ CpalPlayer ──PlayerMessage──→ Playback
//!        (UI thread)                  (rtrb)       (audio thread)
//! ```

pub mod assets;
pub mod output;
pub mod playback;

pub use assets::SoundBank;
pub use output::CpalPlayer;
pub use playback::Playback;

use crate::catalog::Note;

/// Receiver for note playback requests.
pub trait SoundPlayer {
    /// Start playing `note`, superseding anything still sounding.
    fn play_note(&mut self, note: Note);

    /// Stop and free any in-flight sound. Safe to call repeatedly.
    fn release(&mut self);
}

/// Allow boxed players to be used as players (for dynamic dispatch)
impl SoundPlayer for Box<dyn SoundPlayer> {
    fn play_note(&mut self, note: Note) {
        (**self).play_note(note)
    }

    fn release(&mut self) {
        (**self).release()
    }
}

/// Player that makes no sound. Used with `--mute` or when no device exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play_note(&mut self, note: Note) {
        log::debug!(target: "audio", "muted: skipping {note}");
    }

    fn release(&mut self) {}
}
