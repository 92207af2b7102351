//! Record of past lucky spins.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fortune::SpinRecord;

/// Number of spins kept.
pub const SPIN_CAPACITY: usize = 50;

/// Past spins, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinLog {
    records: Vec<SpinRecord>,
}

impl SpinLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a spin.
    pub fn push(&mut self, record: SpinRecord) {
        self.records.insert(0, record);
        self.records.truncate(SPIN_CAPACITY);
    }

    /// Date of the most recent spin.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Spins, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SpinRecord> {
        self.records.iter()
    }

    /// Number of spins.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no spin was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::fortunes;

    fn record(day: u32) -> SpinRecord {
        SpinRecord {
            fortune: fortunes().remove(0),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        }
    }

    #[test]
    fn last_date_is_newest() {
        let mut log = SpinLog::new();
        assert!(log.is_empty());
        assert_eq!(log.last_date(), None);
        log.push(record(1));
        log.push(record(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.last_date(), NaiveDate::from_ymd_opt(2024, 1, 2));
    }

    #[test]
    fn log_is_capped() {
        let mut log = SpinLog::new();
        for i in 0..60 {
            log.push(record(i % 28 + 1));
        }
        assert_eq!(log.len(), SPIN_CAPACITY);
    }
}
