use std::path::PathBuf;

use thiserror::Error;

/// Result type for fallible constructors in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while opening stores, loading assets or starting audio.
///
/// Round logic itself never fails; these only come out of constructors.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem access failed.
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A TOML document could not be parsed.
    #[error("malformed toml in {path}: {source}")]
    TomlDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value could not be serialized to TOML.
    #[error("failed to encode toml: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// A WAV asset could not be decoded.
    #[error("failed to decode wav {path}: {source}")]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// The host has no default output device.
    #[error("no default output device available")]
    NoOutputDevice,

    /// The output device refused to report a config.
    #[error("failed to fetch default output config: {0}")]
    StreamConfig(#[from] cpal::DefaultStreamConfigError),

    /// The output stream could not be built.
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    /// The output stream could not be started.
    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
