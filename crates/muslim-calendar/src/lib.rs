//! Calendar utilities for `muslim`.
//!
//! Proleptic Gregorian date arithmetic and the Julian date used as the time
//! origin of the solar formulas.

mod gregorian;
mod julian;

pub use gregorian::{days_in_month, is_leap, next_day, CalendarDate, Days};
pub use julian::{day_number, days_since_epoch, julian_date, julian_day};
