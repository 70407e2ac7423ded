//! # Muslim
//!
//! Daily Islamic prayer times for the Indonesian Ministry of Religious Affairs
//! (Kemenag) convention: Fajr at -20°, Isha at -18°, standard Asr shadow and
//! the published ihtiyat minutes.
//!
//! This crate is a facade that re-exports functionality from the `muslim` workspace.
//!
//! ## Modules
//!
//! - `types`: Core types (PrayerTimes, GeoParams, MuslimError, formatting)
//! - `calendar`: Gregorian calendar and Julian date conversion
//! - `astronomy`: Sun position, hour angles and prayer assembly
//! - `range`: Lazy evaluation over a date range
//!
//! ## Usage
//!
//! ```rust
//! use muslim::prelude::*;
//!
//! let times = muslim::compute(2025, 11, 22, -6.1944, 106.8229, 7.0)?; // Result<PrayerTimes, MuslimError>
//! assert_eq!(format_hm(times.dhuhr), "11:41");
//! # Ok::<(), MuslimError>(())
//! ```

pub use muslim_core::*;
