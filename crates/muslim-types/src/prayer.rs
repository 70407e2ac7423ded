use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::clock::ClockTime;
use crate::constants::*;
use crate::MuslimError;

/// The seven daily times, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuha,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All times in the order they occur during the day.
    pub const ALL: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuha,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Short lowercase key, stable for serialization by hosts.
    pub fn key(&self) -> &'static str {
        match self {
            Prayer::Fajr => "fajr",
            Prayer::Sunrise => "sunrise",
            Prayer::Dhuha => "dhuha",
            Prayer::Dhuhr => "dhuhr",
            Prayer::Asr => "asr",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
        }
    }

    /// Precautionary adjustment in minutes. Dhuha has none of its own.
    pub fn ihtiyat(&self) -> f64 {
        match self {
            Prayer::Fajr => IHTIYAT_FAJR,
            Prayer::Sunrise => IHTIYAT_SUNRISE,
            Prayer::Dhuha => 0.0,
            Prayer::Dhuhr => IHTIYAT_DHUHR,
            Prayer::Asr => IHTIYAT_ASR,
            Prayer::Maghrib => IHTIYAT_MAGHRIB,
            Prayer::Isha => IHTIYAT_ISHA,
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Prayer::Fajr => "Fajr (Subuh)",
            Prayer::Sunrise => "Sunrise (Terbit)",
            Prayer::Dhuha => "Dhuha",
            Prayer::Dhuhr => "Dhuhr (Dzuhur)",
            Prayer::Asr => "Asr (Ashar)",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha (Isya)",
        };
        write!(f, "{}", s)
    }
}

/// Prayer times for one day, as decimal hours of local clock time in [0, 24).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuha: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl PrayerTimes {
    /// Decimal hour of a single time.
    pub fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuha => self.dhuha,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// `(prayer, decimal hour)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, f64)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Hour and minute of a time, rounded to the nearest minute.
    pub fn clock(&self, prayer: Prayer) -> ClockTime {
        ClockTime::from_hours(self.get(prayer))
    }

    /// True when fajr <= sunrise <= ... <= isha.
    ///
    /// Holds for ordinary latitudes; a false result means the location is
    /// beyond the point where every altitude is reached on this date.
    pub fn is_chronological(&self) -> bool {
        let values: SmallVec<[f64; 7]> = self.iter().map(|(_, t)| t).collect();
        values.windows(2).all(|w| w[0] <= w[1])
    }
}

/// A day's times plus the prayers whose hour-angle solve had to be clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub times: PrayerTimes,
    /// Prayers whose target altitude is never reached (polar day or night).
    pub clamped: SmallVec<[Prayer; 5]>,
}

impl PrayerSchedule {
    pub fn new(times: PrayerTimes, clamped: SmallVec<[Prayer; 5]>) -> Self {
        Self { times, clamped }
    }

    pub fn is_clamped(&self, prayer: Prayer) -> bool {
        self.clamped.contains(&prayer)
    }

    /// Returns the times only when no solve was clamped.
    ///
    /// # Errors
    /// `PolarEdgeCase` naming the first clamped prayer.
    pub fn strict(self) -> Result<PrayerTimes, MuslimError> {
        match self.clamped.first() {
            Some(&prayer) => Err(MuslimError::PolarEdgeCase { prayer }),
            None => Ok(self.times),
        }
    }
}
