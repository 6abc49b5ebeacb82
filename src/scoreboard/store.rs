//! File-backed scoreboard persistence.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::format;
use super::ranking::Scoreboard;
use crate::core::Result;

/// Loads and saves a scoreboard file.
///
/// Saves always rewrite the whole file: the text is written to a sibling
/// `.tmp` file which is then renamed over the target, so readers see either
/// the old or the new board, never a partial one.
#[derive(Clone, Debug)]
pub struct ScoreboardStore {
    path: PathBuf,
}

impl ScoreboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the scoreboard. A missing file is an empty board.
    ///
    /// Invalid UTF-8 is decoded lossily so the remaining entries survive
    /// and the next save does not discard them.
    pub fn load(&self) -> Result<Scoreboard> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                if matches!(text, Cow::Owned(_)) {
                    warn!(path = %self.path.display(), "scoreboard is not valid UTF-8, replacing bad bytes");
                }
                let board = format::parse(&text);
                info!(path = %self.path.display(), buckets = board.len(), "loaded scoreboard");
                Ok(board)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no scoreboard yet, starting empty");
                Ok(Scoreboard::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the file with every bucket of `board`.
    pub fn save(&self, board: &Scoreboard) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, format::render(board))?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), buckets = board.len(), "saved scoreboard");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
