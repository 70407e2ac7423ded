//! WASM bindings for Muslim - Kemenag prayer times engine
//!
//! Provides WebAssembly bindings that return prayer times as `HH:MM` strings.

use wasm_bindgen::prelude::*;
use muslim_core::{CalendarDate, GeoParams, MuslimError, PrayerCalendar, PrayerTimes, format_hm};
use serde::Serialize;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn parse_date(date_str: &str) -> Result<CalendarDate, String> {
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map(CalendarDate::from)
        .map_err(|e| format!("Invalid date format: {}", e))
}

fn js_error(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(js_error)
}

fn day(date: CalendarDate, geo: &GeoParams) -> Result<WasmPrayerTimes, MuslimError> {
    muslim_core::compute_for(date, geo).map(|times| WasmPrayerTimes::new(date, &times))
}

fn days(calendar: &PrayerCalendar) -> Vec<WasmPrayerTimes> {
    calendar.dated().map(|(date, times)| WasmPrayerTimes::new(date, &times)).collect()
}

/// Computes prayer times for a date string (YYYY-MM-DD).
///
/// # Example (JavaScript)
/// ```js
/// const t = prayerTimes("2025-11-22", -6.1944, 106.8229, 7);
/// console.log(t.maghrib); // "17:53"
/// ```
#[wasm_bindgen(js_name = prayerTimes)]
pub fn prayer_times(date_str: &str, latitude: f64, longitude: f64, utc_offset: f64) -> Result<JsValue, JsValue> {
    let date = parse_date(date_str).map_err(js_error)?;
    let geo = GeoParams::new(latitude, longitude, utc_offset).map_err(js_error)?;
    to_js(&day(date, &geo).map_err(js_error)?)
}

/// Computes prayer times for every day from `start` through `end` (YYYY-MM-DD).
#[wasm_bindgen(js_name = prayerTimesRange)]
pub fn prayer_times_range(
    start: &str,
    end: &str,
    latitude: f64,
    longitude: f64,
    utc_offset: f64,
) -> Result<JsValue, JsValue> {
    let start = parse_date(start).map_err(js_error)?;
    let end = parse_date(end).map_err(js_error)?;
    let calendar = muslim_core::compute_range(start, end, latitude, longitude, utc_offset)
        .map_err(js_error)?;
    to_js(&days(&calendar))
}

/// Class-based API holding a validated location.
///
/// # Example (JavaScript)
/// ```js
/// const jakarta = new PrayerCalculator(-6.1944, 106.8229, 7);
/// const today = jakarta.today();
/// const week = jakarta.range("2025-11-20", "2025-11-26");
/// ```
#[wasm_bindgen]
pub struct PrayerCalculator {
    geo: GeoParams,
}

#[wasm_bindgen]
impl PrayerCalculator {
    /// Creates a calculator for the given location.
    #[wasm_bindgen(constructor)]
    pub fn new(latitude: f64, longitude: f64, utc_offset: f64) -> Result<PrayerCalculator, JsValue> {
        console_error_panic_hook::set_once();
        let geo = GeoParams::new(latitude, longitude, utc_offset).map_err(js_error)?;
        Ok(PrayerCalculator { geo })
    }

    /// Prayer times for a date string (YYYY-MM-DD).
    pub fn on(&self, date_str: &str) -> Result<JsValue, JsValue> {
        let date = parse_date(date_str).map_err(js_error)?;
        to_js(&day(date, &self.geo).map_err(js_error)?)
    }

    /// Prayer times for today's local date.
    pub fn today(&self) -> Result<JsValue, JsValue> {
        let date = CalendarDate::from(chrono::Local::now().date_naive());
        to_js(&day(date, &self.geo).map_err(js_error)?)
    }

    /// Prayer times for every day from `start` through `end`.
    pub fn range(&self, start: &str, end: &str) -> Result<JsValue, JsValue> {
        let start = parse_date(start).map_err(js_error)?;
        let end = parse_date(end).map_err(js_error)?;
        let calendar = PrayerCalendar::new(start, end, self.geo).map_err(js_error)?;
        to_js(&days(&calendar))
    }
}

/// WASM-friendly representation of PrayerTimes for TypeScript generation.
#[derive(Debug, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmPrayerTimes {
    pub date: String,
    pub fajr: String,
    pub sunrise: String,
    pub dhuha: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl WasmPrayerTimes {
    fn new(date: CalendarDate, times: &PrayerTimes) -> Self {
        Self {
            date: date.to_string(),
            fajr: format_hm(times.fajr),
            sunrise: format_hm(times.sunrise),
            dhuha: format_hm(times.dhuha),
            dhuhr: format_hm(times.dhuhr),
            asr: format_hm(times.asr),
            maghrib: format_hm(times.maghrib),
            isha: format_hm(times.isha),
        }
    }
}
