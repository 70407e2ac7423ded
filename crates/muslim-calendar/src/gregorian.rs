use chrono::{Datelike, NaiveDate};
use muslim_types::MuslimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

/// True for Gregorian leap years.
pub fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of a month whose number is already known to be in 1..=12.
fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 => if is_leap(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `InvalidMonth` if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, MuslimError> {
    if !(1..=12).contains(&month) {
        return Err(MuslimError::InvalidMonth { month });
    }
    Ok(month_length(year, month))
}

/// The day after `year-month-day`.
///
/// # Errors
/// Returns `InvalidDate` if the input is not a Gregorian date.
pub fn next_day(year: i32, month: u32, day: u32) -> Result<(i32, u32, u32), MuslimError> {
    let date = CalendarDate::new(year, month, day)?;
    let next = date.succ().ok_or_else(|| MuslimError::invalid_date(year, month, day))?;
    Ok((next.year, next.month, next.day))
}

/// A Gregorian calendar date. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Validated constructor.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month or day is out of range.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, MuslimError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    pub fn validate(&self) -> Result<(), MuslimError> {
        let invalid = || MuslimError::invalid_date(self.year, self.month, self.day);
        let len = days_in_month(self.year, self.month).map_err(|_| invalid())?;
        if self.day == 0 || self.day > len {
            return Err(invalid());
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The following day, or `None` past the last representable year.
    ///
    /// Assumes `self` is valid.
    pub fn succ(&self) -> Option<Self> {
        step(*self, month_length(self.year, self.month))
    }

    /// Iterates from `self` through `end`, both inclusive.
    ///
    /// Empty if `end` precedes `self`. Assumes `self` is valid.
    pub fn days_through(self, end: CalendarDate) -> Days {
        Days {
            current: Some(self),
            end,
            month_len: month_length(self.year, self.month),
        }
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month(), day: date.day() }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Advances one day given the length of the current month.
fn step(date: CalendarDate, month_len: u32) -> Option<CalendarDate> {
    if date.day < month_len {
        return Some(CalendarDate { day: date.day + 1, ..date });
    }
    if date.month < 12 {
        return Some(CalendarDate { month: date.month + 1, day: 1, ..date });
    }
    Some(CalendarDate { year: date.year.checked_add(1)?, month: 1, day: 1 })
}

/// Inclusive day-by-day iterator. Month length is looked up once per month.
#[derive(Debug, Clone)]
pub struct Days {
    current: Option<CalendarDate>,
    end: CalendarDate,
    month_len: u32,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.filter(|d| *d <= self.end)?;

        self.current = step(current, self.month_len);
        if let Some(next) = self.current {
            if next.month != current.month {
                self.month_len = month_length(next.year, next.month);
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(current) if current <= self.end => {
                let remaining = (crate::day_number(self.end) - crate::day_number(current) + 1) as usize;
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(is_leap(2024));
        assert!(!is_leap(2023));
        assert!(is_leap(-4));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Ok(29));
        assert_eq!(days_in_month(2023, 2), Ok(28));
        assert_eq!(days_in_month(2023, 4), Ok(30));
        assert_eq!(days_in_month(2023, 12), Ok(31));
        assert_eq!(days_in_month(2023, 0), Err(MuslimError::InvalidMonth { month: 0 }));
        assert_eq!(days_in_month(2023, 13), Err(MuslimError::InvalidMonth { month: 13 }));
    }

    #[test]
    fn test_validation() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert_eq!(
            CalendarDate::new(2023, 2, 29),
            Err(MuslimError::invalid_date(2023, 2, 29))
        );
        assert!(CalendarDate::new(2023, 13, 1).is_err());
        assert!(CalendarDate::new(2023, 6, 0).is_err());
        assert!(!CalendarDate { year: 2023, month: 4, day: 31 }.is_valid());
    }

    #[test]
    fn test_next_day_rollovers() {
        assert_eq!(next_day(2024, 3, 15), Ok((2024, 3, 16)));
        assert_eq!(next_day(2024, 2, 28), Ok((2024, 2, 29)));
        assert_eq!(next_day(2023, 2, 28), Ok((2023, 3, 1)));
        assert_eq!(next_day(2024, 4, 30), Ok((2024, 5, 1)));
        assert_eq!(next_day(2024, 12, 31), Ok((2025, 1, 1)));
        assert!(next_day(2024, 2, 30).is_err());
    }

    #[test]
    fn test_days_through_crosses_year() {
        let days: Vec<CalendarDate> = date(2023, 12, 30).days_through(date(2024, 1, 2)).collect();
        assert_eq!(
            days,
            vec![date(2023, 12, 30), date(2023, 12, 31), date(2024, 1, 1), date(2024, 1, 2)]
        );
    }

    #[test]
    fn test_days_through_leap_february() {
        let days = date(2024, 2, 1).days_through(date(2024, 3, 1));
        assert_eq!(days.len(), 30);
        assert_eq!(days.last(), Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_days_through_empty_and_single() {
        assert_eq!(date(2024, 3, 2).days_through(date(2024, 3, 1)).count(), 0);
        let single: Vec<_> = date(2024, 3, 1).days_through(date(2024, 3, 1)).collect();
        assert_eq!(single, vec![date(2024, 3, 1)]);
    }

    #[test]
    fn test_days_through_matches_chrono() {
        let start = NaiveDate::from_ymd_opt(1999, 11, 20).unwrap();
        let end = NaiveDate::from_ymd_opt(2001, 3, 10).unwrap();
        let ours: Vec<CalendarDate> = CalendarDate::from(start).days_through(end.into()).collect();
        let theirs: Vec<CalendarDate> = start.iter_days().take_while(|d| *d <= end).map(Into::into).collect();
        assert_eq!(ours, theirs);
    }

    #[test]
    fn test_display_and_naive_date() {
        let d = date(2025, 11, 22);
        assert_eq!(d.to_string(), "2025-11-22");
        assert_eq!(d.to_naive_date(), NaiveDate::from_ymd_opt(2025, 11, 22));
    }
}
