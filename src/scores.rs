#![cfg(feature = "std")]
//! Persisted table of best winning times.
//!
//! The table lives in a JSON file holding an array of
//! `{"name": .., "seconds": .., "time": "MM:SS"}` objects. A missing or
//! damaged file reads as an empty table and failed writes are only logged:
//! the in-memory table stays authoritative for the session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SCORE_TABLE_LIMIT;

/// Errors raised while reading or writing the score file.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("score file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("score file format: {0}")]
    Json(#[from] serde_json::Error),
    #[error("player name is empty")]
    EmptyName,
}

/// One finished game in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub seconds: u64,
    /// Cached `MM:SS` form of `seconds`.
    pub time: String,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, seconds: u64) -> Self {
        Self {
            name: name.into(),
            seconds,
            time: format_time(seconds),
        }
    }

    /// Rebuild a record from an arbitrary JSON value, the way old or
    /// hand-edited files are accepted. Returns `None` for unusable entries.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = match obj.get("name")? {
            Value::String(s) => s.trim().to_string(),
            // A null name is a broken entry; skip it instead of storing "null".
            Value::Null => return None,
            other => other.to_string(),
        };
        if name.is_empty() {
            return None;
        }
        let seconds = match obj.get("seconds") {
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {
                n.as_u64().unwrap_or(0)
            }
            _ => parse_time(obj.get("time")?.as_str()?)?,
        };
        Some(Self::new(name, seconds))
    }
}

/// `MM:SS`, zero padded; minutes grow past two digits for very long games.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parse `MM:SS` where both parts are plain digits.
pub fn parse_time(text: &str) -> Option<u64> {
    let (minutes, seconds) = text.split_once(':')?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(minutes) || !all_digits(seconds) {
        return None;
    }
    Some(minutes.parse::<u64>().ok()? * 60 + seconds.parse::<u64>().ok()?)
}

/// Best times, fastest first, capped at `SCORE_TABLE_LIMIT`.
#[derive(Debug, Clone)]
pub struct ScoreLedger {
    path: PathBuf,
    records: Vec<ScoreRecord>,
}

impl ScoreLedger {
    /// Open the table stored at `path`. Never fails; problems yield an
    /// empty table.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match read_records(&path) {
            Ok(records) => records,
            Err(ScoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("ignoring score file {}: {}", path.display(), e);
                Vec::new()
            }
        };
        Self { path, records }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a finished game and rewrite the file. Returns the 0-based rank of
    /// the new record, or `None` if it did not make the table.
    pub fn add_record(&mut self, name: &str, seconds: u64) -> Result<Option<usize>, ScoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoreError::EmptyName);
        }
        // Equal times keep their order; a newcomer goes after them.
        let rank = self.records.partition_point(|r| r.seconds <= seconds);
        self.records.insert(rank, ScoreRecord::new(name, seconds));
        self.records.truncate(SCORE_TABLE_LIMIT);
        if let Err(e) = self.save() {
            log::warn!("could not write score file {}: {}", self.path.display(), e);
        }
        Ok((rank < SCORE_TABLE_LIMIT).then_some(rank))
    }

    /// Write the whole table, pretty printed.
    pub fn save(&self) -> Result<(), ScoreError> {
        let text = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

fn read_records(path: &Path) -> Result<Vec<ScoreRecord>, ScoreError> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let raw: Value = serde_json::from_str(&text)?;
    let mut records: Vec<ScoreRecord> = raw
        .as_array()
        .map(|items| items.iter().filter_map(ScoreRecord::from_value).collect())
        .unwrap_or_default();
    records.sort_by_key(|r| r.seconds);
    records.truncate(SCORE_TABLE_LIMIT);
    Ok(records)
}
