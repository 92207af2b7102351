//! Summary figures over a reading history.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use sb_core::CharmId;

use super::log::ReadingHistory;

/// Number of favourite charms reported.
pub const FAVORITE_COUNT: usize = 5;

/// Totals and habits derived from saved readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    /// Saved readings.
    pub total_readings: usize,
    /// Most drawn charms with their draw counts, most frequent first.
    pub favorite_charms: Vec<(CharmId, usize)>,
    /// Consecutive days with a reading, ending today or yesterday.
    pub streak_days: u32,
}

impl HistoryStats {
    /// Compute stats as of `today`, a UTC calendar day like the record dates.
    pub fn compute(history: &ReadingHistory, today: NaiveDate) -> Self {
        let mut counts: HashMap<&CharmId, usize> = HashMap::new();
        for id in history.iter().flat_map(|r| &r.charms) {
            *counts.entry(id).or_default() += 1;
        }
        let mut favorite_charms: Vec<(CharmId, usize)> = counts
            .into_iter()
            .map(|(id, n)| (id.clone(), n))
            .collect();
        favorite_charms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        favorite_charms.truncate(FAVORITE_COUNT);

        let days: BTreeSet<NaiveDate> = history.iter().map(|r| r.date.date_naive()).collect();
        Self {
            total_readings: history.len(),
            favorite_charms,
            streak_days: streak(&days, today),
        }
    }
}

fn streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut cursor = if days.contains(&today) {
        today
    } else {
        match today.pred_opt().filter(|d| days.contains(d)) {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };
    let mut count = 0;
    while days.contains(&cursor) {
        count += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ReadingRecord;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn record(day: u32, charms: &[&str]) -> ReadingRecord {
        ReadingRecord {
            id: Uuid::new_v4(),
            date: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            question: String::new(),
            charms: charms.iter().map(|c| CharmId::from(*c)).collect(),
            houses: Vec::new(),
            combinations: Vec::new(),
            interpretation: String::new(),
            name: format!("day {day}"),
        }
    }

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn empty_history_has_no_stats() {
        let stats = HistoryStats::compute(&ReadingHistory::new(), may(1));
        assert_eq!(stats.total_readings, 0);
        assert!(stats.favorite_charms.is_empty());
        assert_eq!(stats.streak_days, 0);
    }

    #[test]
    fn favorites_are_ranked_by_count_then_id() {
        let mut h = ReadingHistory::new();
        h.save(record(1, &["void", "flow"]));
        h.save(record(2, &["flow", "catalyst"]));
        h.save(record(3, &["flow", "void", "echo"]));
        let stats = HistoryStats::compute(&h, may(3));
        assert_eq!(stats.total_readings, 3);
        let ranked: Vec<_> = stats
            .favorite_charms
            .iter()
            .map(|(id, n)| (id.as_str(), *n))
            .collect();
        assert_eq!(ranked, [("flow", 3), ("void", 2), ("catalyst", 1), ("echo", 1)]);
    }

    #[test]
    fn streak_counts_back_from_today_or_yesterday() {
        let mut h = ReadingHistory::new();
        for day in [1, 3, 4, 5] {
            h.save(record(day, &["flow"]));
        }
        assert_eq!(HistoryStats::compute(&h, may(5)).streak_days, 3);
        assert_eq!(HistoryStats::compute(&h, may(6)).streak_days, 3);
        assert_eq!(HistoryStats::compute(&h, may(7)).streak_days, 0);
        assert_eq!(HistoryStats::compute(&h, may(2)).streak_days, 1);
    }
}
