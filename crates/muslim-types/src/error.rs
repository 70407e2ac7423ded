use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Prayer;

/// Errors from muslim operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum MuslimError {
    /// Month or day outside the Gregorian calendar.
    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Month outside 1..=12.
    #[error("Invalid month {month} (must be between 1 and 12)")]
    InvalidMonth { month: u32 },

    /// Latitude, longitude or UTC offset outside its physical range.
    #[error("Invalid location: {reason}")]
    InvalidGeo { reason: String },

    /// The sun never reaches the altitude that defines this prayer.
    #[error("Sun never reaches the {prayer} altitude at this latitude and date")]
    PolarEdgeCase { prayer: Prayer },
}

impl MuslimError {
    /// Creates an `InvalidDate` error.
    pub fn invalid_date(year: i32, month: u32, day: u32) -> Self {
        Self::InvalidDate { year, month, day }
    }

    /// Creates an `InvalidGeo` error.
    pub fn invalid_geo(reason: impl Into<String>) -> Self {
        Self::InvalidGeo { reason: reason.into() }
    }
}
