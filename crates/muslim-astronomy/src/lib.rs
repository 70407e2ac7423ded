//! Astronomy for `muslim`: sun position, hour angles and the daily prayer times.

pub mod hour_angle;
mod math;
pub mod prayer;
pub mod solar;

pub use hour_angle::{asr_altitude, hour_angle, HourAngle};
pub use prayer::{calculate_prayer_times, solar_noon};
pub use solar::SolarState;
