//! Decimal hour to wall-clock text.
//!
//! Whole hours are truncated, the remainder is rounded to the nearest minute
//! (or second), and a rounded 60 carries upward. Hours wrap modulo 24.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

const INVALID_HM: &str = "--:--";
const INVALID_HMS: &str = "--:--:--";

/// Hour and minute of a prayer time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Rounds a decimal hour to the nearest minute.
    ///
    /// Non-finite input yields midnight; use [`format_hm`] to detect it.
    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() {
            return Self::default();
        }
        let t = hours.rem_euclid(24.0);
        let whole = t.trunc();
        let mut hour = whole as u32;
        let mut minute = ((t - whole) * 60.0).round() as u32;
        if minute == 60 {
            minute = 0;
            hour += 1;
        }
        Self { hour: hour % 24, minute }
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Formats a decimal hour as `HH:MM`.
pub fn format_hm(hours: f64) -> String {
    if !hours.is_finite() {
        return INVALID_HM.into();
    }
    ClockTime::from_hours(hours).to_string()
}

/// Formats a decimal hour as `HH:MM:SS`.
pub fn format_hms(hours: f64) -> String {
    if !hours.is_finite() {
        return INVALID_HMS.into();
    }
    let t = hours.rem_euclid(24.0);
    let whole = t.trunc();
    let minutes = (t - whole) * 60.0;
    let whole_minutes = minutes.trunc();

    let mut hour = whole as u32;
    let mut minute = whole_minutes as u32;
    let mut second = ((minutes - whole_minutes) * 60.0).round() as u32;
    if second == 60 {
        second = 0;
        minute += 1;
    }
    if minute == 60 {
        minute = 0;
        hour += 1;
    }
    format!("{:02}:{:02}:{:02}", hour % 24, minute, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hm_basic() {
        assert_eq!(format_hm(0.0), "00:00");
        assert_eq!(format_hm(4.5), "04:30");
        assert_eq!(format_hm(11.7), "11:42");
        assert_eq!(format_hm(19.15), "19:09");
    }

    #[test]
    fn test_format_hm_rounds_and_carries() {
        // 5:59:40 rounds up to 6:00
        assert_eq!(format_hm(5.0 + 59.0 / 60.0 + 40.0 / 3600.0), "06:00");
        // 23:59:50 wraps to midnight
        assert_eq!(format_hm(23.0 + 59.0 / 60.0 + 50.0 / 3600.0), "00:00");
        // 12:10:29 stays
        assert_eq!(format_hm(12.0 + 10.0 / 60.0 + 29.0 / 3600.0), "12:10");
    }

    #[test]
    fn test_format_hm_wraps_out_of_range() {
        assert_eq!(format_hm(24.5), "00:30");
        assert_eq!(format_hm(-0.5), "23:30");
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(4.5), "04:30:00");
        assert_eq!(format_hms(12.0 + 10.0 / 60.0 + 29.0 / 3600.0), "12:10:29");
        // 7:59:59.8 carries through seconds and minutes
        assert_eq!(format_hms(8.0 - 0.2 / 3600.0), "08:00:00");
        assert_eq!(format_hms(24.0 - 0.2 / 3600.0), "00:00:00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_hm(f64::NAN), "--:--");
        assert_eq!(format_hms(f64::INFINITY), "--:--:--");
        assert_eq!(ClockTime::from_hours(f64::NAN), ClockTime::default());
    }

    #[test]
    fn test_clock_time_helpers() {
        let c = ClockTime::from_hours(17.9);
        assert_eq!(c, ClockTime { hour: 17, minute: 54 });
        assert_eq!(c.minutes(), 17 * 60 + 54);
        assert_eq!(c.to_naive_time(), NaiveTime::from_hms_opt(17, 54, 0));
    }
}
