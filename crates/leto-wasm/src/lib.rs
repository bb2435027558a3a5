//! WASM bindings for leto-core.
//!
//! Exposes period decomposition and cross-calendar conversion to JavaScript
//! via `wasm-bindgen`. JavaScript builds one [`LetoCalendars`] handle and
//! reuses it; decompositions cross the boundary as JSON strings.
//!
//! Day offsets are plain JavaScript numbers. They must be integers within
//! `Number.MAX_SAFE_INTEGER`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p leto-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/leto-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/leto_wasm.wasm
//! ```

use chrono::NaiveDate;
use leto_core::{Calendar, CalendarKind, Calendars, Locale, PeriodView};
use serde::Serialize;
use wasm_bindgen::prelude::*;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DecompositionDto {
    calendar: CalendarKind,
    day_offset: i64,
    periods: Vec<PeriodView>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Accept a JavaScript number as a day offset.
fn to_day_offset(value: f64) -> Result<i64, JsValue> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Ok(value as i64)
    } else {
        Err(JsValue::from_str(&format!(
            "Day offset must be a safe integer, got {}",
            value
        )))
    }
}

fn parse_kind(calendar: &str) -> Result<CalendarKind, JsValue> {
    calendar.parse().map_err(to_js_error)
}

fn parse_locale(locale: Option<String>) -> Result<Locale, JsValue> {
    locale
        .as_deref()
        .map_or(Ok(Locale::En), str::parse::<Locale>)
        .map_err(to_js_error)
}

fn decomposition_json(
    kind: CalendarKind,
    calendar: &Calendar,
    day_offset: i64,
    locale: Locale,
) -> Result<String, JsValue> {
    let periods = calendar
        .calculate_calendar_periods(day_offset)
        .map_err(to_js_error)?;
    let dto = DecompositionDto {
        calendar: kind,
        day_offset,
        periods: calendar.describe(&periods, locale).map_err(to_js_error)?,
    };
    serde_json::to_string(&dto).map_err(to_js_error)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Every calendar, built and verified once.
#[wasm_bindgen]
pub struct LetoCalendars {
    calendars: Calendars,
}

#[wasm_bindgen]
impl LetoCalendars {
    /// Build the Julian, Gregorian and Bulgarian calendars.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<LetoCalendars, JsValue> {
        let calendars = Calendars::build().map_err(to_js_error)?;
        Ok(Self { calendars })
    }

    /// Days from the calendar's day zero to 1970-01-01.
    #[wasm_bindgen(js_name = "epochOffsetDays")]
    pub fn epoch_offset_days(&self, calendar: &str) -> Result<f64, JsValue> {
        let kind = parse_kind(calendar)?;
        Ok(self.calendars.get(kind).epoch_offset_days() as f64)
    }

    /// Decompose a day offset into the calendar's periods.
    ///
    /// Returns a JSON string `{calendar, day_offset, periods}` where `periods`
    /// lists `{period_type, structure, number, absolute_number,
    /// starts_at_days_after_epoch, length_in_days}` objects, finest first.
    ///
    /// # Arguments
    /// - `calendar` -- "julian", "gregorian" or "bulgarian"
    /// - `day_offset` -- Non-negative integer day count from the calendar's day zero
    /// - `locale` -- Optional "en" (default) or "bg"
    #[wasm_bindgen(js_name = "calculateCalendarPeriods")]
    pub fn calculate_calendar_periods(
        &self,
        calendar: &str,
        day_offset: f64,
        locale: Option<String>,
    ) -> Result<String, JsValue> {
        let kind = parse_kind(calendar)?;
        let day_offset = to_day_offset(day_offset)?;
        let locale = parse_locale(locale)?;
        decomposition_json(kind, self.calendars.get(kind), day_offset, locale)
    }

    /// Decompose a Gregorian civil date given as "YYYY-MM-DD".
    #[wasm_bindgen(js_name = "periodsForDate")]
    pub fn periods_for_date(
        &self,
        calendar: &str,
        date: &str,
        locale: Option<String>,
    ) -> Result<String, JsValue> {
        let kind = parse_kind(calendar)?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", date, e)))?;
        let locale = parse_locale(locale)?;

        let calendar = self.calendars.get(kind);
        decomposition_json(kind, calendar, calendar.day_offset_for_date(date), locale)
    }

    /// Translate a day offset of `from` into the same day in `to`.
    #[wasm_bindgen(js_name = "convertDayOffset")]
    pub fn convert_day_offset(&self, day_offset: f64, from: &str, to: &str) -> Result<f64, JsValue> {
        let day_offset = to_day_offset(day_offset)?;
        let source = self.calendars.get(parse_kind(from)?);
        let target = self.calendars.get(parse_kind(to)?);
        let converted = source
            .convert_day_offset(day_offset, target)
            .map_err(to_js_error)?;
        Ok(converted as f64)
    }
}
