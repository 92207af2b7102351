//! Lunar phase approximation used to boost rare charms.

use chrono::{Datelike, Local, NaiveDate};

/// Phase value treated as the new moon.
pub const NEW_MOON: u32 = 0;
/// Phase value treated as the full moon.
pub const FULL_MOON: u32 = 15;

/// Approximate lunar phase for a date: day of month modulo 30.
pub fn lunar_phase(date: NaiveDate) -> u32 {
    date.day() % 30
}

/// Today's date on the local calendar, which the phase and spin cooldown follow.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether the phase is a new or full moon.
pub fn is_moon_peak(phase: u32) -> bool {
    phase == NEW_MOON || phase == FULL_MOON
}

/// Short label for a phase value.
pub fn phase_name(phase: u32) -> &'static str {
    match phase % 30 {
        NEW_MOON => "New Moon",
        1..=14 => "Waxing",
        FULL_MOON => "Full Moon",
        _ => "Waning",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn phase_is_day_mod_thirty() {
        assert_eq!(lunar_phase(day(15)), 15);
        assert_eq!(lunar_phase(day(30)), 0);
        assert_eq!(lunar_phase(day(31)), 1);
    }

    #[test]
    fn peaks_are_new_and_full_moon() {
        assert!(is_moon_peak(0));
        assert!(is_moon_peak(15));
        assert!(!is_moon_peak(7));
        assert_eq!(phase_name(0), "New Moon");
        assert_eq!(phase_name(15), "Full Moon");
        assert_eq!(phase_name(20), "Waning");
    }
}
