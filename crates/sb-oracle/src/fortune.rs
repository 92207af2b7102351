//! The daily lucky spin.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ReadingError, ReadingResult};
use crate::random::RandomSource;

/// Life area a fortune speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneCategory {
    /// Relationships.
    Love,
    /// Work.
    Career,
    /// Wellbeing.
    Health,
    /// Judgement.
    Wisdom,
    /// Money.
    Prosperity,
}

impl fmt::Display for FortuneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::Health => "health",
            Self::Wisdom => "wisdom",
            Self::Prosperity => "prosperity",
        };
        f.write_str(s)
    }
}

const WHEEL: [(&str, FortuneCategory); 8] = [
    (
        "New opportunities await in your professional journey",
        FortuneCategory::Career,
    ),
    (
        "A meaningful connection will strengthen your relationships",
        FortuneCategory::Love,
    ),
    (
        "Your intuition will guide you to the right decision",
        FortuneCategory::Wisdom,
    ),
    (
        "Focus on balance will improve your well-being",
        FortuneCategory::Health,
    ),
    (
        "Financial stability comes through careful planning",
        FortuneCategory::Prosperity,
    ),
    (
        "Creative expression will bring unexpected rewards",
        FortuneCategory::Career,
    ),
    (
        "Trust in yourself will overcome current challenges",
        FortuneCategory::Wisdom,
    ),
    (
        "Small acts of kindness will return to you multiplied",
        FortuneCategory::Love,
    ),
];

/// One segment of the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    /// Segment number, 1-8.
    pub id: u8,
    /// Fortune text.
    pub text: String,
    /// Life area.
    pub category: FortuneCategory,
}

/// A fortune and the day it was spun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinRecord {
    /// The fortune won.
    pub fortune: Fortune,
    /// Calendar day of the spin.
    pub date: NaiveDate,
}

/// All eight segments in wheel order.
pub fn fortunes() -> Vec<Fortune> {
    WHEEL
        .iter()
        .zip(1u8..)
        .map(|((text, category), id)| Fortune {
            id,
            text: text.to_string(),
            category: *category,
        })
        .collect()
}

/// Spin the wheel once per calendar day.
///
/// Fails with [`ReadingError::SpinCooldown`] if `last_spin` is today (or
/// later, if the clock moved backwards).
pub fn spin<R>(
    rng: &mut R,
    today: NaiveDate,
    last_spin: Option<NaiveDate>,
) -> ReadingResult<SpinRecord>
where
    R: RandomSource + ?Sized,
{
    if let Some(last) = last_spin.filter(|last| *last >= today) {
        return Err(ReadingError::SpinCooldown {
            next_available: last.succ_opt().unwrap_or(last),
        });
    }

    let mut wheel = fortunes();
    let fortune = wheel.swap_remove(rng.pick_index(wheel.len()));
    info!(segment = fortune.id, category = %fortune.category, "lucky spin");
    Ok(SpinRecord {
        fortune,
        date: today,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn wheel_has_eight_segments() {
        let all = fortunes();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[7].id, 8);
    }

    #[test]
    fn first_spin_of_the_day_succeeds() {
        let mut src = ScriptedSource::constant(0.0);
        let record = spin(&mut src, day(10), None).unwrap();
        assert_eq!(record.date, day(10));
        assert_eq!(record.fortune.id, 1);

        let mut src = ScriptedSource::constant(0.99);
        let record = spin(&mut src, day(10), Some(day(9))).unwrap();
        assert_eq!(record.fortune.id, 8);
    }

    #[test]
    fn second_spin_same_day_is_refused() {
        let mut src = ScriptedSource::constant(0.5);
        let err = spin(&mut src, day(10), Some(day(10))).unwrap_err();
        match err {
            ReadingError::SpinCooldown { next_available } => assert_eq!(next_available, day(11)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn spin_record_serde_roundtrip() {
        let mut src = ScriptedSource::constant(0.3);
        let record = spin(&mut src, day(1), None).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: SpinRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
