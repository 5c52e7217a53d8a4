//! Flat-file persistence for the event collection.
//!
//! The whole collection lives in a single JSON array that is read in
//! full and rewritten in full on every mutation. Reads fail open: a
//! missing or malformed file is treated as an empty collection.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::sync::{Mutex, MutexGuard};

use super::models::Event;

pub struct EventStore {
    path: PathBuf,
    // Serializes load-modify-save sequences within this process
    write_lock: Mutex<()>,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the store lock. Hold the guard across a `load`, the
    /// in-memory change and the matching `save`.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Read the full collection from disk. Records are kept as raw JSON
    /// so only a file that is not a JSON array reads as empty.
    pub fn load(&self) -> Result<Vec<Event>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };

        match serde_json::from_str::<Vec<Event>>(&content) {
            Ok(events) => Ok(events),
            Err(e) => {
                tracing::warn!(
                    "Ignoring event file {} that is not a JSON array: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the file with the given collection.
    pub fn save(&self, events: &[Event]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        events.serialize(&mut serializer)?;

        fs::write(&self.path, buf)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        tracing::debug!("Saved {} events to {}", events.len(), self.path.display());
        Ok(())
    }
}

/// Id for the next event: one more than the largest id in use, or 1
/// for an empty collection. Records without an integer id are skipped.
pub fn next_id(events: &[Event]) -> Result<u64> {
    match events.iter().filter_map(Event::id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| anyhow!("No ids left after {}", max)),
    }
}
