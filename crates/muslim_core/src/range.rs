//! Prayer times over a date range.

use log::debug;
use muslim_astronomy::calculate_prayer_times;
use muslim_calendar::{day_number, CalendarDate, Days};
use muslim_types::{GeoParams, MuslimError, PrayerSchedule, PrayerTimes};
use std::iter::FusedIterator;

/// An inclusive, validated date range at one location.
///
/// Computation happens lazily during iteration. Each day is independent, so a
/// calendar can be split with [`PrayerCalendar::partition`] and evaluated on
/// several threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerCalendar {
    start: CalendarDate,
    end: CalendarDate,
    geo: GeoParams,
}

impl PrayerCalendar {
    /// # Errors
    /// `InvalidDate` if either bound is invalid, `InvalidGeo` if `geo` is.
    pub fn new(start: CalendarDate, end: CalendarDate, geo: GeoParams) -> Result<Self, MuslimError> {
        start.validate()?;
        end.validate()?;
        geo.validate()?;

        let calendar = Self { start, end, geo };
        debug!("prayer calendar {start}..={end}: {} day(s)", calendar.len());
        Ok(calendar)
    }

    pub fn start(&self) -> CalendarDate { self.start }
    pub fn end(&self) -> CalendarDate { self.end }
    pub fn geo(&self) -> &GeoParams { &self.geo }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        (day_number(self.end) - day_number(self.start) + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// The dates covered, in order.
    pub fn dates(&self) -> Days {
        self.start.days_through(self.end)
    }

    /// Prayer times for each day, in order.
    pub fn iter(&self) -> PrayerCalendarIter {
        PrayerCalendarIter { days: self.dates(), geo: self.geo }
    }

    /// Each day's times paired with its date.
    pub fn dated(&self) -> impl Iterator<Item = (CalendarDate, PrayerTimes)> + use<> {
        self.schedules().map(|(date, schedule)| (date, schedule.times))
    }

    /// Each day's full schedule, including polar clamp diagnostics.
    pub fn schedules(&self) -> impl Iterator<Item = (CalendarDate, PrayerSchedule)> + use<> {
        let geo = self.geo;
        self.dates().map(move |date| (date, calculate_prayer_times(date, &geo)))
    }

    /// Splits into consecutive sub-ranges of at most `max_days` days.
    ///
    /// Concatenating the parts' output in order reproduces this calendar.
    pub fn partition(&self, max_days: usize) -> Vec<PrayerCalendar> {
        let max_days = max_days.max(1);
        let mut parts = Vec::with_capacity(self.len().div_ceil(max_days));
        let mut days = self.dates();
        while let Some(first) = days.next() {
            let last = days.by_ref().take(max_days - 1).last().unwrap_or(first);
            parts.push(Self { start: first, end: last, geo: self.geo });
        }
        parts
    }
}

impl IntoIterator for PrayerCalendar {
    type Item = PrayerTimes;
    type IntoIter = PrayerCalendarIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PrayerCalendar {
    type Item = PrayerTimes;
    type IntoIter = PrayerCalendarIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`PrayerCalendar`].
#[derive(Debug, Clone)]
pub struct PrayerCalendarIter {
    days: Days,
    geo: GeoParams,
}

impl Iterator for PrayerCalendarIter {
    type Item = PrayerTimes;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.days.next()?;
        Some(calculate_prayer_times(date, &self.geo).times)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.days.size_hint()
    }
}

impl ExactSizeIterator for PrayerCalendarIter {}

impl FusedIterator for PrayerCalendarIter {}
