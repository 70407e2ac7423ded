//! Apparent position of the sun (low-precision almanac formulas).

use muslim_calendar::days_since_epoch;
use muslim_types::constants::*;

use crate::math::*;

/// Sun position for one instant. Angles in degrees, equation of time in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarState {
    pub julian_date: f64,
    pub mean_anomaly: f64,
    pub mean_longitude: f64,
    pub ecliptic_longitude: f64,
    pub obliquity: f64,
    pub declination: f64,
    pub right_ascension: f64,
    /// Mean minus apparent solar time, in (-12, 12].
    pub equation_of_time: f64,
}

impl SolarState {
    /// Computes the sun's position at a Julian date.
    pub fn at(julian_date: f64) -> Self {
        let d = days_since_epoch(julian_date);

        let mean_anomaly = normalize_degrees(SUN_MEAN_ANOMALY_OFFSET + SUN_MEAN_ANOMALY_RATE * d);
        let mean_longitude = normalize_degrees(SUN_MEAN_LONGITUDE_OFFSET + SUN_MEAN_LONGITUDE_RATE * d);
        let ecliptic_longitude = mean_longitude
            + SUN_ECCENTRICITY_AMPLITUDE1 * sin_deg(mean_anomaly)
            + SUN_ECCENTRICITY_AMPLITUDE2 * sin_deg(2.0 * mean_anomaly);
        let obliquity = OBLIQUITY_COEFF - OBLIQUITY_RATE * d;

        let declination = asin_deg(sin_deg(obliquity) * sin_deg(ecliptic_longitude));
        let right_ascension = normalize_degrees(atan2_deg(
            cos_deg(obliquity) * sin_deg(ecliptic_longitude),
            cos_deg(ecliptic_longitude),
        ));
        // Both operands are in [0, 360) so the difference may wrap a full day.
        let equation_of_time = normalize_hour_offset((mean_longitude - right_ascension) / 15.0);

        Self {
            julian_date,
            mean_anomaly,
            mean_longitude,
            ecliptic_longitude,
            obliquity,
            declination,
            right_ascension,
            equation_of_time,
        }
    }
}
