//! Degree-based trigonometry. Angles stay in degrees outside these helpers.

pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

pub fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Normalizes an angle to [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Normalizes an hour difference to (-12, 12].
pub fn normalize_hour_offset(hours: f64) -> f64 {
    let mut h = hours;
    while h > 12.0 {
        h -= 24.0;
    }
    while h <= -12.0 {
        h += 24.0;
    }
    h
}

/// Wraps a clock time into [0, 24).
pub fn wrap_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    if wrapped >= 24.0 { 0.0 } else { wrapped }
}
