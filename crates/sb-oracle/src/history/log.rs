//! Reading history storage and export.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::record::ReadingRecord;
use crate::error::{ReadingError, ReadingResult};

/// Default number of readings kept.
pub const DEFAULT_CAPACITY: usize = 100;

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Saved readings, newest first, capped at a fixed capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct ReadingHistory {
    capacity: usize,
    records: Vec<ReadingRecord>,
}

/// On-disk form, normalized through [`ReadingHistory::set_capacity`].
#[derive(Deserialize)]
struct StoredHistory {
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default)]
    records: Vec<ReadingRecord>,
}

impl From<StoredHistory> for ReadingHistory {
    fn from(stored: StoredHistory) -> Self {
        let mut history = Self {
            capacity: stored.capacity,
            records: stored.records,
        };
        history.set_capacity(stored.capacity);
        history
    }
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ReadingHistory {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `capacity` readings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: Vec::new(),
        }
    }

    /// Maximum number of readings kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, dropping the oldest readings if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.records.truncate(self.capacity);
    }

    /// Save a reading at the front, evicting the oldest beyond capacity.
    ///
    /// A record with an id already present replaces the old copy.
    pub fn save(&mut self, record: ReadingRecord) -> Uuid {
        let id = record.id;
        self.records.retain(|r| r.id != id);
        self.records.insert(0, record);
        if self.records.len() > self.capacity {
            let dropped = self.records.len() - self.capacity;
            self.records.truncate(self.capacity);
            debug!(dropped, "history trimmed");
        }
        id
    }

    /// Look up a reading.
    pub fn get(&self, id: Uuid) -> Option<&ReadingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Resolve a full id or a unique id prefix.
    pub fn resolve(&self, input: &str) -> ReadingResult<Uuid> {
        if let Ok(id) = Uuid::parse_str(input) {
            return self.get(id).map(|r| r.id).ok_or(ReadingError::NotFound(id));
        }
        let prefix = input.trim().to_lowercase().replace('-', "");
        let mut hits = self
            .records
            .iter()
            .filter(|r| !prefix.is_empty() && r.id.simple().to_string().starts_with(&prefix));
        match (hits.next(), hits.next()) {
            (Some(record), None) => Ok(record.id),
            _ => Err(ReadingError::NoSuchReading(input.to_string())),
        }
    }

    /// Set a reading's display name.
    pub fn rename(&mut self, id: Uuid, name: impl Into<String>) -> ReadingResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReadingError::NotFound(id))?;
        record.name = name.into();
        Ok(())
    }

    /// Remove a reading, returning it.
    pub fn delete(&mut self, id: Uuid) -> ReadingResult<ReadingRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReadingError::NotFound(id))?;
        Ok(self.records.remove(idx))
    }

    /// Readings, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ReadingRecord> {
        self.records.iter()
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export the history as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Starboard Readings\n\n");
        for record in &self.records {
            out.push_str(&format!("## {}\n\n", record.name));
            out.push_str(&format!("*{}*\n\n", record.date.format("%Y-%m-%d %H:%M UTC")));
            if !record.question.is_empty() {
                out.push_str(&format!("**Question**: {}\n\n", record.question));
            }
            let charms: Vec<&str> = record.charms.iter().map(|c| c.as_str()).collect();
            out.push_str(&format!("**Charms**: {}\n\n", charms.join(", ")));
            if !record.combinations.is_empty() {
                out.push_str(&format!(
                    "**Combinations**: {}\n\n",
                    record.combinations.join(", ")
                ));
            }
            out.push_str(&format!("> {}\n\n", record.interpretation));
        }
        out
    }

    /// Export the history as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Starboard Readings\n==================\n\n");
        for record in &self.records {
            out.push_str(&format!("--- {} ---\n", record.name));
            out.push_str(&format!("Date: {}\n", record.date.format("%Y-%m-%d %H:%M UTC")));
            if !record.question.is_empty() {
                out.push_str(&format!("Question: {}\n", record.question));
            }
            let charms: Vec<&str> = record.charms.iter().map(|c| c.as_str()).collect();
            out.push_str(&format!("Charms: {}\n", charms.join(", ")));
            if !record.combinations.is_empty() {
                out.push_str(&format!("Combinations: {}\n", record.combinations.join(", ")));
            }
            out.push_str(&format!("{}\n\n", record.interpretation));
        }
        out
    }
}
