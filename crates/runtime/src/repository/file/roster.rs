//! JSON file-backed PlayerRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::Roster;
use serde::Serialize;

use crate::repository::{PlayerRepository, RepositoryError, Result};

/// Stores the roster as one JSON object keyed by player id.
///
/// # File Format
///
/// A single pretty-printed JSON document with 4-space indentation, e.g.
///
/// ```text
/// {
///     "184467": {
///         "class": "warrior",
///         "level": 1,
///         ...
///     }
/// }
/// ```
///
/// Saves go to `<file>.tmp` first and are renamed over the target.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by `path`. The file is created on first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(roster: &Roster) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
        roster
            .serialize(&mut serializer)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        Ok(bytes)
    }
}

impl PlayerRepository for JsonFileRepository {
    fn load(&self) -> Result<Roster> {
        if !self.path.exists() {
            tracing::debug!("No roster at {}, starting empty", self.path.display());
            return Ok(Roster::new());
        }

        let json = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let roster: Roster = serde_json::from_str(&json).map_err(|e| {
            RepositoryError::CorruptState(format!("{}: {}", self.path.display(), e))
        })?;

        tracing::debug!(
            "Loaded {} characters from {}",
            roster.len(),
            self.path.display()
        );

        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let bytes = Self::encode(roster)?;
        let temp_path = self.path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved {} characters to {}",
            roster.len(),
            self.path.display()
        );

        Ok(())
    }
}
