use serde::{Deserialize, Serialize};

use crate::constants::{MAX_UTC_OFFSET, MIN_UTC_OFFSET};
use crate::MuslimError;

/// Observer location and the clock offset the results are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoParams {
    /// Degrees, north positive. [-90, 90]
    pub latitude: f64,
    /// Degrees, east positive. [-180, 180]
    pub longitude: f64,
    /// Decimal hours east of UTC (e.g. 7.0 for WIB, 5.5 for IST).
    pub utc_offset: f64,
}

impl GeoParams {
    /// Validated constructor.
    ///
    /// # Errors
    /// Returns `InvalidGeo` if a coordinate is out of range or not finite,
    /// or if the offset is outside UTC-12..=UTC+14.
    pub fn new(latitude: f64, longitude: f64, utc_offset: f64) -> Result<Self, MuslimError> {
        let geo = Self { latitude, longitude, utc_offset };
        geo.validate()?;
        Ok(geo)
    }

    /// Starts a builder.
    pub fn builder() -> GeoParamsBuilder {
        GeoParamsBuilder::new()
    }

    /// Re-checks the ranges, for values built by struct literal or deserialized.
    pub fn validate(&self) -> Result<(), MuslimError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(MuslimError::invalid_geo(format!(
                "latitude {} outside [-90, 90]", self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(MuslimError::invalid_geo(format!(
                "longitude {} outside [-180, 180]", self.longitude
            )));
        }
        if !(MIN_UTC_OFFSET..=MAX_UTC_OFFSET).contains(&self.utc_offset) {
            return Err(MuslimError::invalid_geo(format!(
                "UTC offset {} outside [{}, {}]", self.utc_offset, MIN_UTC_OFFSET, MAX_UTC_OFFSET
            )));
        }
        Ok(())
    }
}

/// Builder with validation for `GeoParams`.
#[derive(Debug, Default, Clone)]
pub struct GeoParamsBuilder {
    latitude: Option<f64>,
    longitude: Option<f64>,
    utc_offset: Option<f64>,
}

impl GeoParamsBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn latitude(mut self, latitude: f64) -> Self { self.latitude = Some(latitude); self }
    pub fn longitude(mut self, longitude: f64) -> Self { self.longitude = Some(longitude); self }
    pub fn utc_offset(mut self, hours: f64) -> Self { self.utc_offset = Some(hours); self }

    /// Builds and validates.
    ///
    /// Without an explicit offset the nominal zone of the longitude is used
    /// (`round(longitude / 15)`).
    pub fn build(self) -> Result<GeoParams, MuslimError> {
        let latitude = self.latitude
            .ok_or_else(|| MuslimError::invalid_geo("latitude is required"))?;
        let longitude = self.longitude
            .ok_or_else(|| MuslimError::invalid_geo("longitude is required"))?;
        let utc_offset = self.utc_offset.unwrap_or_else(|| (longitude / 15.0).round());

        GeoParams::new(latitude, longitude, utc_offset)
    }
}
