//! Append-only JSON Lines journal
//!
//! The engine is insert-only, so durability reduces to an append-only log:
//! one serialized `Profile` per line, flushed on every append, replayed in
//! order on open. A corrupt line fails the replay; the store must not
//! present a silently truncated catalog as healthy.

use dossier_core::{Error, Profile, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Append-only journal of inserted profiles
pub struct Journal {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl Journal {
    /// Open the journal at `path`, replaying any existing records first.
    ///
    /// Returns the journal handle and the replayed profiles in append order.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, Vec<Profile>)> {
        let path = path.into();
        let replayed = if path.exists() {
            Self::replay(&path)?
        } else {
            Vec::new()
        };
        if !replayed.is_empty() {
            info!(profiles = replayed.len(), path = %path.display(), "journal replayed");
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                path,
                writer: Mutex::new(BufWriter::new(file)),
            },
            replayed,
        ))
    }

    fn replay(path: &Path) -> Result<Vec<Profile>> {
        let reader = BufReader::new(File::open(path)?);
        let mut profiles = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let profile: Profile = serde_json::from_str(&line).map_err(|e| {
                Error::Serialization(format!(
                    "invalid journal record at line {}: {e}",
                    lineno + 1
                ))
            })?;
            profiles.push(profile);
        }
        Ok(profiles)
    }

    /// Append one profile and flush it to the OS.
    pub fn append(&self, profile: &Profile) -> Result<()> {
        let line =
            serde_json::to_string(profile).map_err(|e| Error::Serialization(e.to_string()))?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    /// Flush any buffered writes.
    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for Journal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Journal").field("path", &self.path).finish()
    }
}
