//! Core types for `muslim`, the Kemenag prayer times engine.
//!
//! Shared by every crate in the workspace: the prayer record, the location
//! parameters, the error taxonomy, the clock formatter and the calculation
//! constants.

pub mod clock;
pub mod constants;
mod error;
mod geo;
mod prayer;

pub use clock::{format_hm, format_hms, ClockTime};
pub use error::MuslimError;
pub use geo::{GeoParams, GeoParamsBuilder};
pub use prayer::{Prayer, PrayerSchedule, PrayerTimes};
