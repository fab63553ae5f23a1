use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ScoreStore;
use crate::error::{Error, Result};

/// On-disk layout: a single `best_score = N` key.
#[derive(Serialize, Deserialize, Default)]
struct ScoreFile {
    #[serde(default)]
    best_score: u32,
}

/// Best score kept in a TOML file in the app's data directory.
///
/// Nothing is cached: every query and every save reads the file again, so
/// several stores (or other processes) sharing one path never lower it.
/// Read failures and write failures are logged, never returned: a broken
/// score file must not stop anyone from playing.
#[derive(Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Default location: `<data_dir>/perfect-pitch/scores.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("perfect-pitch").join("scores.toml"))
    }

    /// Open (or prepare) the store at `path`, creating its directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        log::debug!(target: "score", "best score {} from {}", read_best(&path), path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, best: u32) -> Result<()> {
        let contents = toml::to_string(&ScoreFile { best_score: best })?;

        // Write beside the target and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, contents).map_err(|e| Error::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| Error::io(&self.path, e))?;
        Ok(())
    }
}

/// Stored best score at `path`; a missing file holds 0.
pub fn load_best(path: &Path) -> Result<u32> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(Error::io(path, e)),
    };

    let file: ScoreFile = toml::from_str(&contents).map_err(|source| Error::TomlDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.best_score)
}

fn read_best(path: &Path) -> u32 {
    load_best(path).unwrap_or_else(|e| {
        log::warn!(target: "score", "ignoring stored best score: {e}");
        0
    })
}

impl ScoreStore for FileScoreStore {
    fn best_score(&self) -> u32 {
        read_best(&self.path)
    }

    fn save_if_higher(&mut self, score: u32) {
        if score <= read_best(&self.path) {
            return;
        }

        match self.write(score) {
            Ok(()) => log::info!(target: "score", "new best score {score}"),
            Err(e) => log::warn!(target: "score", "failed to save best score: {e}"),
        }
    }
}
