// src/history.rs
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::models::{GeneratedPassword, StrengthLabel};

/// Records kept before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub password: String,
    pub timestamp: DateTime<Utc>,
    pub strength: StrengthLabel,
}

impl HistoryRecord {
    /// Shapes a record from a fresh generation, stamped with the current
    /// time and the strength label at creation.
    pub fn new(generated: &GeneratedPassword) -> Self {
        Self {
            password: generated.password.clone(),
            timestamp: Utc::now(),
            strength: generated.strength.label,
        }
    }
}

/// Most-recent-first sequence of generated passwords, bounded to
/// [`HISTORY_CAPACITY`] entries.
#[derive(Debug, Clone, Default)]
pub struct PasswordHistory {
    records: Vec<HistoryRecord>,
}

impl PasswordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates from stored records, enforcing the capacity bound in
    /// case the blob was written by an older build.
    pub fn from_records(mut records: Vec<HistoryRecord>) -> Self {
        records.truncate(HISTORY_CAPACITY);
        Self { records }
    }

    pub fn push(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAPACITY);
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Opaque persistence for the history sequence. `load` never fails: a
/// missing or malformed blob is treated as an empty history.
pub trait HistoryStore {
    fn load(&self) -> Vec<HistoryRecord>;
    fn save(&mut self, records: &[HistoryRecord]) -> Result<()>;
}

/// JSON blob on disk.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.history_file.clone())
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Vec<HistoryRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "discarding malformed history blob at {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, records: &[HistoryRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-process store for tests and embedders that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    records: Vec<HistoryRecord>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Vec<HistoryRecord> {
        self.records.clone()
    }

    fn save(&mut self, records: &[HistoryRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}
