//! Persist the high score to disk (XDG config or ~/.config/block-puzzle).
//!
//! The file holds a single non-negative integer. Missing or unreadable
//! content loads as 0; a failed write is reported to the caller, which keeps
//! playing.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use block_puzzle_core::highscore::{parse_high_score, HighScoreStore, StoreError};

pub use block_puzzle_core as core;

const APP_DIR: &str = "block-puzzle";
const FILENAME: &str = "highscore";

/// Config base directory: `$XDG_CONFIG_HOME`, else `$HOME/.config`.
fn config_base() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => return Ok(PathBuf::from(xdg)),
        _ => {}
    }
    let home = std::env::var("HOME").context("neither XDG_CONFIG_HOME nor HOME is set")?;
    Ok(PathBuf::from(home).join(".config"))
}

/// Default location of the high score file.
pub fn default_path() -> Result<PathBuf> {
    Ok(config_base()?.join(APP_DIR).join(FILENAME))
}

/// High score kept in a plain text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_path`].
    pub fn at_default_path() -> Result<Self> {
        Ok(Self::new(default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<u32, StoreError> {
        let content = fs::read_to_string(&self.path)?;
        parse_high_score(&content)
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(score) => {
                debug!(path = %self.path.display(), score, "loaded high score");
                score
            }
            Err(StoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable high score");
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut f = fs::File::create(&self.path)?;
        writeln!(f, "{}", score)?;
        debug!(path = %self.path.display(), score, "saved high score");
        Ok(())
    }
}
