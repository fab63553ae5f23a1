//! Round state snapshots.
//!
//! A `RoundState` is never edited in place by observers: the controller
//! builds a new snapshot for every transition and publishes it whole.

use std::fmt;

use crate::catalog::Note;

use super::ROUND_LENGTH;

/// Everything the screens need to draw one moment of a round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundState {
    /// A note has been chosen for this attempt and is waiting for an answer
    pub is_playing: bool,
    /// Note the player must identify; `None` before the first attempt
    pub current_note: Option<Note>,
    /// Answer choices in display order (the right one plus distractors)
    pub options: Vec<Note>,
    /// Correct answers this round
    pub score: u32,
    /// Answers given this round, right or wrong
    pub total_attempts: u32,
    /// Result of the last answer, until dismissed
    pub feedback: Option<Feedback>,
    /// Set only on the snapshot published while a new attempt is prepared
    pub is_loading: bool,
    /// The round has used all of its attempts
    pub is_game_over: bool,
    /// Persisted best score as of the last refresh
    pub best_score: u32,
}

impl RoundState {
    /// A zeroed round seeded with the stored best score.
    pub fn fresh(best_score: u32) -> Self {
        Self {
            best_score,
            ..Self::default()
        }
    }

    /// Whole-percent accuracy, `None` before the first answer.
    pub fn accuracy(&self) -> Option<u32> {
        (self.total_attempts > 0).then(|| self.score * 100 / self.total_attempts)
    }

    /// Every attempt of a finished round answered correctly.
    pub fn is_perfect(&self) -> bool {
        self.total_attempts == ROUND_LENGTH && self.score == self.total_attempts
    }

    /// Answer buttons accept input only while no feedback is showing.
    pub fn options_enabled(&self) -> bool {
        self.feedback.is_none()
    }

    /// Attempts left in this round.
    pub fn attempts_remaining(&self) -> u32 {
        ROUND_LENGTH.saturating_sub(self.total_attempts)
    }
}

/// Outcome of one answer, revealing the note that was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    correct: bool,
    note: Note,
}

impl Feedback {
    pub fn new(correct: bool, note: Note) -> Self {
        Self { correct, note }
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// The note that was actually played.
    pub fn note(&self) -> Note {
        self.note
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.correct { "Correct!" } else { "Wrong!" };
        write!(f, "{verdict} The note was {}", self.note)
    }
}
