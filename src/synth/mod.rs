// Purpose: turn a quiz note into a gated, enveloped tone
// This layer sits above the DSP primitives and below audio playback

pub mod message;
pub mod voice;

pub use message::PlayerMessage;
pub use voice::{ToneVoice, VoiceSettings};
