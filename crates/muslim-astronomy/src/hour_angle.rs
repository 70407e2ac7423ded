//! Hour angle of the sun at a target altitude.

use crate::math::*;

/// Time from local solar noon until the sun reaches a given altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngle {
    /// Offset from solar noon in hours, in [0, 12].
    pub hours: f64,
    /// The altitude is never reached on this day; `hours` is the nearest bound
    /// (0 when the sun stays below it, 12 when it stays above).
    pub clamped: bool,
}

/// Solves `cos H = (sin h - sin φ sin δ) / (cos φ cos δ)`.
///
/// Out-of-range cosines are clamped to [-1, 1] and flagged. Inputs are degrees.
pub fn hour_angle(altitude: f64, latitude: f64, declination: f64) -> HourAngle {
    let cos_h = (sin_deg(altitude) - sin_deg(latitude) * sin_deg(declination))
        / (cos_deg(latitude) * cos_deg(declination));

    let (bounded, clamped) = if cos_h.is_nan() {
        (1.0, true)
    } else if cos_h > 1.0 || cos_h < -1.0 {
        (cos_h.clamp(-1.0, 1.0), true)
    } else {
        (cos_h, false)
    };

    HourAngle { hours: acos_deg(bounded) / 15.0, clamped }
}

/// Sun altitude at which a shadow equals `shadow_factor` object lengths plus
/// the noon shadow.
pub fn asr_altitude(shadow_factor: f64, latitude: f64, declination: f64) -> f64 {
    atan_deg(1.0 / (shadow_factor + tan_deg((latitude - declination).abs())))
}
