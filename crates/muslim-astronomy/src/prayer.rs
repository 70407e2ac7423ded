//! Prayer times assembly (Kemenag convention).
//!
//! Solar noon anchors the day. Morning times sit one hour angle before it,
//! afternoon and evening times one hour angle after it. Ihtiyat is applied to
//! every solved time, then Dhuha is placed between the adjusted sunrise and
//! Dhuhr.

use log::{trace, warn};
use muslim_calendar::{julian_date, CalendarDate};
use muslim_types::constants::*;
use muslim_types::{GeoParams, Prayer, PrayerSchedule, PrayerTimes};
use smallvec::SmallVec;

use crate::hour_angle::{asr_altitude, hour_angle};
use crate::math::wrap_hours;
use crate::solar::SolarState;

/// Local clock time of solar transit, in decimal hours (not wrapped).
pub fn solar_noon(longitude: f64, utc_offset: f64, equation_of_time: f64) -> f64 {
    12.0 - longitude / 15.0 + utc_offset - equation_of_time
}

fn solve(
    prayers: &[Prayer],
    altitude: f64,
    geo: &GeoParams,
    sun: &SolarState,
    clamped: &mut SmallVec<[Prayer; 5]>,
) -> f64 {
    let ha = hour_angle(altitude, geo.latitude, sun.declination);
    if ha.clamped {
        warn!(
            "sun never reaches {:.3}° at latitude {:.4} (declination {:.3}); clamping {:?}",
            altitude, geo.latitude, sun.declination, prayers
        );
        clamped.extend_from_slice(prayers);
    }
    ha.hours
}

fn with_ihtiyat(raw: f64, prayer: Prayer) -> f64 {
    raw + prayer.ihtiyat() / 60.0
}

/// Calculates the seven daily times for a date and location.
///
/// Inputs are assumed valid; `muslim_core::compute` validates before calling.
///
/// # Example
/// ```rust
/// use muslim_astronomy::calculate_prayer_times;
/// use muslim_calendar::CalendarDate;
/// use muslim_types::GeoParams;
///
/// let date = CalendarDate::new(2024, 3, 15).unwrap();
/// let jakarta = GeoParams::new(-6.2088, 106.8456, 7.0).unwrap();
///
/// let schedule = calculate_prayer_times(date, &jakarta);
/// assert!(schedule.clamped.is_empty());
/// assert!(schedule.times.fajr < schedule.times.maghrib);
/// ```
pub fn calculate_prayer_times(date: CalendarDate, geo: &GeoParams) -> PrayerSchedule {
    let sun = SolarState::at(julian_date(date, geo.utc_offset));
    trace!(
        "{date}: jd={:.5} M={:.4} L={:.4} λ={:.4} ε={:.5} δ={:.4} EqT={:.5}h",
        sun.julian_date,
        sun.mean_anomaly,
        sun.mean_longitude,
        sun.ecliptic_longitude,
        sun.obliquity,
        sun.declination,
        sun.equation_of_time
    );

    let noon = solar_noon(geo.longitude, geo.utc_offset, sun.equation_of_time);
    let mut clamped = SmallVec::new();

    let fajr_offset = solve(&[Prayer::Fajr], -FAJR_ANGLE_KEMENAG, geo, &sun, &mut clamped);
    let horizon_offset = solve(
        &[Prayer::Sunrise, Prayer::Maghrib],
        -REFRACTION_CORRECTION,
        geo,
        &sun,
        &mut clamped,
    );
    let asr_offset = solve(
        &[Prayer::Asr],
        asr_altitude(SHADOW_FACTOR_STANDARD, geo.latitude, sun.declination),
        geo,
        &sun,
        &mut clamped,
    );
    let isha_offset = solve(&[Prayer::Isha], -ISHA_ANGLE_KEMENAG, geo, &sun, &mut clamped);
    clamped.sort_unstable();

    let fajr = with_ihtiyat(noon - fajr_offset, Prayer::Fajr);
    let sunrise = with_ihtiyat(noon - horizon_offset, Prayer::Sunrise);
    let dhuhr = with_ihtiyat(noon, Prayer::Dhuhr);
    let asr = with_ihtiyat(noon + asr_offset, Prayer::Asr);
    let maghrib = with_ihtiyat(noon + horizon_offset, Prayer::Maghrib);
    let isha = with_ihtiyat(noon + isha_offset, Prayer::Isha);

    // Starts after sunrise but never later than the cut-off before Dhuhr.
    let dhuha = (sunrise + DHUHA_START_OFFSET / 60.0).min(dhuhr - DHUHA_END_OFFSET / 60.0);

    let times = PrayerTimes {
        fajr: wrap_hours(fajr),
        sunrise: wrap_hours(sunrise),
        dhuha: wrap_hours(dhuha),
        dhuhr: wrap_hours(dhuhr),
        asr: wrap_hours(asr),
        maghrib: wrap_hours(maghrib),
        isha: wrap_hours(isha),
    };

    PrayerSchedule::new(times, clamped)
}
