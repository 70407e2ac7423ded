//! # muslim-core
//!
//! Daily Islamic prayer times (Fajr, Sunrise, Dhuha, Dhuhr, Asr, Maghrib, Isha)
//! following the Indonesian Ministry of Religious Affairs (Kemenag) angles and
//! ihtiyat offsets.
//!
//! ```rust
//! use muslim_core::prelude::*;
//!
//! let times = compute(2025, 11, 22, -6.1944, 106.8229, 7.0)?;
//! println!("Maghrib {}", format_hm(times.maghrib));
//!
//! let start = CalendarDate::new(2025, 11, 20)?;
//! let end = CalendarDate::new(2025, 11, 22)?;
//! for (date, day) in compute_range(start, end, -6.1944, 106.8229, 7.0)?.dated() {
//!     println!("{date}: Fajr {}", format_hm(day.fajr));
//! }
//! # Ok::<(), MuslimError>(())
//! ```

pub mod range;

pub use muslim_astronomy as astronomy;
pub use muslim_calendar as calendar;
pub use muslim_types as types;

pub use muslim_calendar::{days_in_month, is_leap, next_day, CalendarDate};
pub use muslim_types::{
    format_hm, format_hms, ClockTime, GeoParams, GeoParamsBuilder, MuslimError, Prayer,
    PrayerSchedule, PrayerTimes,
};
pub use range::{PrayerCalendar, PrayerCalendarIter};

pub mod prelude {
    pub use crate::{compute, compute_for, compute_range, compute_today};
    pub use crate::{format_hm, format_hms};
    pub use crate::{CalendarDate, GeoParams, MuslimError, Prayer, PrayerCalendar, PrayerTimes};
}

use log::debug;

/// Prayer times for one date and location.
///
/// # Errors
/// `InvalidDate` for a non-Gregorian date, `InvalidGeo` for coordinates or an
/// offset out of range. Nothing is computed in either case.
pub fn compute(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    utc_offset: f64,
) -> Result<PrayerTimes, MuslimError> {
    let date = CalendarDate::new(year, month, day)?;
    let geo = GeoParams::new(latitude, longitude, utc_offset)?;
    compute_for(date, &geo)
}

/// [`compute`] with typed inputs.
pub fn compute_for(date: CalendarDate, geo: &GeoParams) -> Result<PrayerTimes, MuslimError> {
    compute_detailed(date, geo).map(|schedule| schedule.times)
}

/// Like [`compute_for`], also reporting which prayers hit the polar clamp.
pub fn compute_detailed(date: CalendarDate, geo: &GeoParams) -> Result<PrayerSchedule, MuslimError> {
    date.validate()?;
    geo.validate()?;
    debug!(
        "computing prayer times for {date} at ({}, {}) UTC{:+}",
        geo.latitude, geo.longitude, geo.utc_offset
    );
    Ok(astronomy::calculate_prayer_times(date, geo))
}

/// Prayer times for every date in `start..=end`, in chronological order.
///
/// The returned calendar is lazy and can be iterated any number of times.
/// It is empty when `end` precedes `start`.
///
/// # Errors
/// `InvalidDate` if either bound is not a Gregorian date, `InvalidGeo` as in
/// [`compute`].
pub fn compute_range(
    start: CalendarDate,
    end: CalendarDate,
    latitude: f64,
    longitude: f64,
    utc_offset: f64,
) -> Result<PrayerCalendar, MuslimError> {
    let geo = GeoParams::new(latitude, longitude, utc_offset)?;
    PrayerCalendar::new(start, end, geo)
}

/// Prayer times for the current local date.
pub fn compute_today(geo: &GeoParams) -> Result<PrayerTimes, MuslimError> {
    let today = chrono::Local::now().date_naive();
    compute_for(today.into(), geo)
}
