use crate::catalog::Note;

/// User intents sent from the screens to the round controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Pick a note and answer options for the next attempt
    Init,
    /// Play the current note
    PlaySound,
    /// Submit an answer for the current attempt
    SelectNote(Note),
    /// Close the feedback panel and move on
    DismissFeedback,
    /// Throw the round away and start from zero
    ResetGame,
}
