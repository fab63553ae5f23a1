use crate::catalog::Note;

/// Commands sent from the game thread to the audio thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMessage {
    /// Stop whatever is sounding, then start this note.
    Play(Note),
    /// Stop and free any in-flight sound.
    Stop,
}
