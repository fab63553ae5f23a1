pub mod audio; // Note playback: players, assets, audio-thread rendering
pub mod catalog;
pub mod config;
pub mod dsp;
pub mod error;
pub mod game; // Round state machine
pub mod score;
pub mod synth;

pub use catalog::Note;
pub use error::{Error, Result};

pub const MAX_BLOCK_SIZE: usize = 2048;
