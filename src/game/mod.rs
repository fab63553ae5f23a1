//! Round logic: the state machine that drives one ear-training session.
//!
//! ```text
//!   NotStarted ──Init──→ Playing ──SelectNote──→ Answered
//!                          ↑                        │
//!                          └───DismissFeedback──────┤ (attempts < 10)
//!                                                   ↓
//!   NotStarted ←──────────ResetGame──────────── GameOver (attempts == 10)
//! ```

pub mod controller;
pub mod intent;
pub mod options;
pub mod state;

pub use controller::{RoundController, StateObserver};
pub use intent::GameIntent;
pub use state::{Feedback, RoundState};

/// Attempts in one round.
pub const ROUND_LENGTH: u32 = 10;

/// Most wrong answers offered next to the right one.
pub const MAX_DISTRACTORS: usize = 2;

/// Tunable round behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    /// Wrong answers offered per attempt, 0..=MAX_DISTRACTORS.
    pub distractors: usize,
    /// Play the note as soon as each attempt starts.
    pub autoplay: bool,
}

impl RoundSettings {
    pub fn new(distractors: usize, autoplay: bool) -> Self {
        Self {
            distractors: distractors.min(MAX_DISTRACTORS),
            autoplay,
        }
    }
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self::new(MAX_DISTRACTORS, false)
    }
}
