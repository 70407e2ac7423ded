//! Calculation constants (Kemenag standard).
//!
//! Fixed at build time. Angles are degrees, offsets are minutes.

/// Julian date of the J2000.0 epoch (2000-01-01 12:00 UTC).
pub const JULIAN_EPOCH: f64 = 2451545.0;

pub const SUN_MEAN_ANOMALY_OFFSET: f64 = 357.529;
pub const SUN_MEAN_ANOMALY_RATE: f64 = 0.98560028;

pub const SUN_MEAN_LONGITUDE_OFFSET: f64 = 280.459;
pub const SUN_MEAN_LONGITUDE_RATE: f64 = 0.98564736;

/// Equation of center amplitudes.
pub const SUN_ECCENTRICITY_AMPLITUDE1: f64 = 1.915;
pub const SUN_ECCENTRICITY_AMPLITUDE2: f64 = 0.020;

pub const OBLIQUITY_COEFF: f64 = 23.439;
pub const OBLIQUITY_RATE: f64 = 0.00000036;

/// Refraction plus solar semi-diameter, used for sunrise and maghrib.
pub const REFRACTION_CORRECTION: f64 = 0.833;

/// Sun depression for Fajr (Subuh).
pub const FAJR_ANGLE_KEMENAG: f64 = 20.0;
/// Sun depression for Isha (Isya).
pub const ISHA_ANGLE_KEMENAG: f64 = 18.0;

/// Shadow length ratio for Asr (standard madhab).
pub const SHADOW_FACTOR_STANDARD: f64 = 1.0;

/// Dhuha starts this many minutes after sunrise.
pub const DHUHA_START_OFFSET: f64 = 28.0;
/// Dhuha must start at least this many minutes before Dhuhr.
pub const DHUHA_END_OFFSET: f64 = 5.0;

// Ihtiyat
pub const IHTIYAT_FAJR: f64 = 2.0;
pub const IHTIYAT_SUNRISE: f64 = -2.0;
pub const IHTIYAT_DHUHR: f64 = 2.0;
pub const IHTIYAT_ASR: f64 = 2.0;
pub const IHTIYAT_MAGHRIB: f64 = 2.0;
pub const IHTIYAT_ISHA: f64 = 2.0;

/// Accepted UTC offsets in hours (UTC-12 through UTC+14).
pub const MIN_UTC_OFFSET: f64 = -12.0;
pub const MAX_UTC_OFFSET: f64 = 14.0;
