//! Display formatting for catalog timestamps.
//!
//! The remote API reports `created`/`edited` as ISO-8601 strings. They are
//! rendered as `dd/mm/yyyy, HH:MM` (day first, 24-hour clock); date-only
//! values render without a time. Invalid or empty input yields an empty
//! string. Formatting is not idempotent: feed it API values only.

use crate::types::EntityRecord;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use serde_json::Value;

const DATE_TIME_DISPLAY: &str = "%d/%m/%Y, %H:%M";
const DATE_DISPLAY: &str = "%d/%m/%Y";

/// Naive layouts accepted when the input carries no UTC offset.
const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Timestamp formatter bound to a display offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    offset: FixedOffset,
}

impl DateFormatter {
    /// Formatter rendering in UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Formatter rendering in a fixed offset (offset-less inputs are read as UTC).
    #[must_use]
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Format an ISO-8601 value for display; never fails.
    #[must_use]
    pub fn format(&self, input: Option<&str>) -> String {
        let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
            return String::new();
        };

        if let Some(instant) = parse_instant(raw) {
            return instant
                .with_timezone(&self.offset)
                .format(DATE_TIME_DISPLAY)
                .to_string();
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.format(DATE_DISPLAY).to_string();
        }

        tracing::trace!("Unparsable timestamp left blank: {}", raw);
        String::new()
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::utc()
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc())
}

/// Format a timestamp in UTC. See [`DateFormatter::format`].
#[must_use]
pub fn format_date(input: Option<&str>) -> String {
    DateFormatter::utc().format(input)
}

/// Read back a value produced by [`DateFormatter::format`], for ordering.
///
/// Date-only values are placed at midnight. Anything else yields `None`.
#[must_use]
pub fn parse_display(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATE_TIME_DISPLAY)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_DISPLAY)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Format `created` and, when it is a string, `edited` in place.
pub fn normalize_record_dates(record: &mut EntityRecord) {
    normalize_record_dates_with(&DateFormatter::utc(), record);
}

/// Like [`normalize_record_dates`] with an explicit formatter.
pub fn normalize_record_dates_with(formatter: &DateFormatter, record: &mut EntityRecord) {
    record.created = formatter.format(Some(&record.created));
    if let Some(Value::String(edited)) = record.attributes.get_mut("edited") {
        *edited = formatter.format(Some(edited.as_str()));
    }
}
