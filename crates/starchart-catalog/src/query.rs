//! Search and sort parameters, and the comparator behind them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starchart_core::{parse_display, EntityRecord, FieldValue};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort key used until the user picks another one.
pub const DEFAULT_SORT_KEY: &str = "name";

/// User-controlled query over a raw collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Case-insensitive substring matched against `name`
    pub search_text: String,
    /// Field to sort by; `None` keeps fetch order
    pub sort_key: Option<String>,
    /// Sort direction
    pub sort_ascending: bool,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: Some(DEFAULT_SORT_KEY.to_string()),
            sort_ascending: true,
        }
    }
}

impl Query {
    /// Whether `record` passes the search filter.
    #[must_use]
    pub fn matches(&self, record: &EntityRecord) -> bool {
        self.search_text.is_empty()
            || record
                .name
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }

    /// Ascending order of two records under the sort key.
    #[must_use]
    pub fn compare(&self, a: &EntityRecord, b: &EntityRecord) -> Ordering {
        match self.sort_key.as_deref() {
            Some(key) => compare_fields(a.field(key), b.field(key)),
            None => Ordering::Equal,
        }
    }

    /// Filter then sort a copy of `raw`. The input is never reordered.
    ///
    /// Descending results are the ascending results reversed, ties included.
    #[must_use]
    pub fn apply(&self, raw: &[EntityRecord]) -> Vec<EntityRecord> {
        let needle = self.search_text.to_lowercase();
        let mut results: Vec<EntityRecord> = raw
            .iter()
            .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if self.sort_key.is_some() {
            results.sort_by(|a, b| self.compare(a, b));
            if !self.sort_ascending {
                results.reverse();
            }
        }
        results
    }
}

/// Ascending comparison of two field values; undefined sorts last.
///
/// Two timestamps in display form (`dd/mm/yyyy[, HH:MM]`) compare by date.
#[must_use]
pub fn compare_fields(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => {
            match (parse_display(x), parse_display(y)) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => locale_compare(x, y),
            }
        }
        (Some(x), Some(y)) => relational_compare(x, y),
    }
}

/// Collation-style string comparison.
///
/// Letters compare without accents and case first, then accented after
/// plain, then lowercase before uppercase.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| b.cmp(a))
}

/// Lowercased letters with combining marks stripped, e.g. `Éo` → `eo`.
fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn relational_compare(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Json(Value::Bool(x)), FieldValue::Json(Value::Bool(y))) => x.cmp(y),
        _ => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => render(a).cmp(&render(b)),
        },
    }
}

/// Numeric reading of a value: JSON numbers, or numeric text paired with one.
fn as_number(value: FieldValue<'_>) -> Option<f64> {
    match value {
        FieldValue::Json(Value::Number(n)) => n.as_f64(),
        FieldValue::Text(s) => s.trim().parse().ok(),
        FieldValue::Json(_) => None,
    }
}

fn render(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(s) => s.to_string(),
        FieldValue::Json(v) => render_json(v),
    }
}

fn render_json(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_json).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
