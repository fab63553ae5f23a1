use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dsp::Waveform;
use crate::error::{Error, Result};
use crate::game::RoundSettings;
use crate::synth::VoiceSettings;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    game: GameConfig,
    #[serde(default)]
    audio: AudioConfig,
}

#[derive(Deserialize, Default)]
struct GameConfig {
    distractors: Option<usize>,
    autoplay: Option<bool>,
}

#[derive(Deserialize, Default)]
struct AudioConfig {
    waveform: Option<Waveform>,
    octave: Option<u8>,
    volume: Option<f32>,
    note_seconds: Option<f32>,
    sound_dir: Option<PathBuf>,
}

/// User settings, loaded from an optional TOML file over built-in defaults.
#[derive(Default)]
pub struct Config {
    game: GameConfig,
    audio: AudioConfig,
}

impl Config {
    /// Load `<config_dir>/perfect-pitch/config.toml` if it exists.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults if it is unreadable.
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            log::warn!(target: "config", "using default config: {e}");
            Self::default()
        })
    }

    /// Load from `path`, reporting unreadable or malformed files.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&contents).map_err(|source| Error::TomlDecode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config document.
    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Config {
            game: file.game,
            audio: file.audio,
        })
    }

    pub fn round_settings(&self) -> RoundSettings {
        let fallback = RoundSettings::default();
        RoundSettings::new(
            self.game.distractors.unwrap_or(fallback.distractors),
            self.game.autoplay.unwrap_or(fallback.autoplay),
        )
    }

    pub fn voice_settings(&self) -> VoiceSettings {
        let fallback = VoiceSettings::default();
        VoiceSettings {
            waveform: self.audio.waveform.unwrap_or(fallback.waveform),
            // Octaves 1-7 keep every pitch class inside the MIDI range
            octave: self.audio.octave.unwrap_or(fallback.octave).clamp(1, 7),
            volume: self.audio.volume.unwrap_or(fallback.volume).clamp(0.0, 1.0),
            note_seconds: self
                .audio
                .note_seconds
                .unwrap_or(fallback.note_seconds)
                .clamp(0.05, 10.0),
        }
    }

    /// Directory of `<resource_name>.wav` assets, if configured.
    pub fn sound_dir(&self) -> Option<&Path> {
        self.audio.sound_dir.as_deref()
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("perfect-pitch").join("config.toml"))
}
