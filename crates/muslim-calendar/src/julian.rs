//! Julian date conversion (Meeus, proleptic Gregorian).

use muslim_types::constants::JULIAN_EPOCH;

use crate::CalendarDate;

/// Julian date of 0h UTC on the given Gregorian date.
pub fn julian_day(date: CalendarDate) -> f64 {
    let (y, m) = if date.month <= 2 {
        (date.year as f64 - 1.0, date.month as f64 + 12.0)
    } else {
        (date.year as f64, date.month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + date.day as f64 + b - 1524.5
}

/// Julian date of local midnight for a clock running `utc_offset` hours ahead of UTC.
pub fn julian_date(date: CalendarDate, utc_offset: f64) -> f64 {
    julian_day(date) - utc_offset / 24.0
}

/// Days elapsed since J2000.0.
pub fn days_since_epoch(jd: f64) -> f64 {
    jd - JULIAN_EPOCH
}

/// Integer Julian day number; consecutive dates differ by exactly one.
pub fn day_number(date: CalendarDate) -> i64 {
    (julian_day(date) + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_alignment() {
        assert_eq!(julian_day(date(2000, 1, 1)), 2451544.5);
        assert_eq!(days_since_epoch(julian_day(date(2000, 1, 1)) + 0.5), 0.0);
    }

    #[test]
    fn test_known_dates() {
        // Meeus, Astronomical Algorithms, example 7.a
        assert_eq!(julian_day(date(1957, 10, 4)), 2436115.5);
        // First day of the Gregorian calendar
        assert_eq!(julian_day(date(1582, 10, 15)), 2299160.5);
        assert_eq!(julian_day(date(2024, 3, 15)), 2460384.5);
        // Day after a leap day
        assert_eq!(julian_day(date(2024, 3, 1)) - julian_day(date(2024, 2, 28)), 2.0);
    }

    #[test]
    fn test_utc_offset_shifts_to_local_midnight() {
        let d = date(2025, 11, 22);
        let jd = julian_date(d, 7.0);
        assert!((jd - (julian_day(d) - 7.0 / 24.0)).abs() < 1e-9);
        assert!(julian_date(d, -5.0) > julian_day(d));
        assert_eq!(julian_date(d, 0.0), julian_day(d));
    }

    #[test]
    fn test_day_number_is_contiguous() {
        assert_eq!(day_number(date(2000, 1, 1)), 2451545);
        let mut d = date(1899, 12, 25);
        let mut n = day_number(d);
        for _ in 0..800 {
            let next = d.succ().unwrap();
            assert_eq!(day_number(next), n + 1);
            d = next;
            n += 1;
        }
    }
}
