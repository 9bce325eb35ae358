//! Shared types used across the Starchart application.
//!
//! This module defines common newtypes and enums that provide type safety
//! and clear domain modeling.

use crate::error::StarchartError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// The catalog categories that can be fetched from the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Characters
    People,
    /// Planets
    Planets,
    /// Films
    Films,
}

impl ResourceKind {
    /// Every resource kind, in navigation order.
    pub const ALL: [Self; 3] = [Self::People, Self::Planets, Self::Films];

    /// Path segment appended to the API base path.
    #[must_use]
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
            Self::Films => "films",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::People => "People",
            Self::Planets => "Planets",
            Self::Films => "Films",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for ResourceKind {
    type Err = StarchartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_path().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                StarchartError::Validation(format!(
                    "unknown resource kind '{wanted}': expected people, planets or films"
                ))
            })
    }
}

/// Newtype for entity identifiers used in detail requests.
///
/// The id is opaque but is appended to the request path, so it must be
/// non-empty and free of path, query and fragment separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Create a new `EntityId` from a string.
    ///
    /// # Errors
    /// Returns error if the ID is empty or contains `/`, `?`, `#` or whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, StarchartError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Extract the id from an entity `url`, e.g. `https://swapi.info/api/people/1/` → `1`.
    ///
    /// # Errors
    /// Returns error if the URL has no usable trailing segment.
    pub fn from_url(url: &str) -> Result<Self, StarchartError> {
        let segment = url
            .split('/')
            .rev()
            .find(|part| !part.is_empty())
            .ok_or_else(|| {
                StarchartError::Validation(format!("no entity id in url '{url}'"))
            })?;
        Self::new(segment)
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<(), StarchartError> {
        static ID_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = ID_REGEX.get_or_init(|| Regex::new(r"^[^/?#\s]+$").expect("valid regex"));

        if regex.is_match(id) {
            Ok(())
        } else {
            Err(StarchartError::Validation(format!(
                "invalid entity ID: must be a non-empty path segment, got '{id}'"
            )))
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry (person, planet or film).
///
/// `name`, `created` and `url` are always present; every other attribute the
/// API returns is kept verbatim in `attributes`. Films have no `name` upstream,
/// so their `title` doubles as the display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct EntityRecord {
    /// Display name, also the search key
    pub name: String,
    /// Creation timestamp, ISO-8601 until normalized for display
    pub created: String,
    /// Canonical resource URL
    pub url: String,
    /// Resource-specific attributes
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    created: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl From<RawRecord> for EntityRecord {
    fn from(raw: RawRecord) -> Self {
        let name = raw
            .name
            .or_else(|| {
                raw.attributes
                    .get("title")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_default();

        Self {
            name,
            created: raw.created.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            attributes: raw.attributes,
        }
    }
}

impl EntityRecord {
    /// Create a record with only the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        created: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            created: created.into(),
            url: url.into(),
            attributes: Map::new(),
        }
    }

    /// Add an extra attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Raw extra attribute, if present.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Value of any field by name; `None` when the field is absent or null.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::Text(&self.name)),
            "created" => Some(FieldValue::Text(&self.created)),
            "url" => Some(FieldValue::Text(&self.url)),
            _ => match self.attributes.get(key)? {
                Value::Null => None,
                Value::String(s) => Some(FieldValue::Text(s)),
                other => Some(FieldValue::Json(other)),
            },
        }
    }

    /// Id derived from the record's `url`.
    pub fn id(&self) -> Result<EntityId, StarchartError> {
        EntityId::from_url(&self.url)
    }
}

/// Borrowed view of a record field used for sorting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Any string-valued field
    Text(&'a str),
    /// Numbers, booleans, arrays and objects
    Json(&'a Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_kind_parse() {
        assert_eq!("people".parse::<ResourceKind>().unwrap(), ResourceKind::People);
        assert_eq!(" Planets ".parse::<ResourceKind>().unwrap(), ResourceKind::Planets);
        assert_eq!("FILMS".parse::<ResourceKind>().unwrap(), ResourceKind::Films);
        assert!("starships".parse::<ResourceKind>().is_err());
        assert!("".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::People.to_string(), "people");
        assert_eq!(ResourceKind::Films.display_name(), "Films");
    }

    #[test]
    fn test_resource_kind_serialization() {
        let json = serde_json::to_string(&ResourceKind::Planets).expect("serialize kind");
        assert_eq!(json, "\"planets\"");
    }

    #[test]
    fn test_entity_id_valid() {
        for id in ["1", "42", "luke-skywalker", "a_b"] {
            assert!(EntityId::new(id).is_ok(), "Failed for: {id}");
        }
    }

    #[test]
    fn test_entity_id_invalid() {
        for id in ["", "1/2", "1?x=2", "a#b", "two words", " "] {
            assert!(EntityId::new(id).is_err(), "Should fail for: {id:?}");
        }
    }

    #[test]
    fn test_entity_id_from_url() {
        let id = EntityId::from_url("https://swapi.info/api/people/1/").expect("trailing slash");
        assert_eq!(id.as_str(), "1");

        let id = EntityId::from_url("https://swapi.info/api/planets/12").expect("no slash");
        assert_eq!(id.as_str(), "12");

        assert!(EntityId::from_url("").is_err());
        assert!(EntityId::from_url("///").is_err());
    }

    #[test]
    fn test_record_deserialize_keeps_extra_attributes() {
        let record: EntityRecord = serde_json::from_value(json!({
            "name": "Luke Skywalker",
            "height": "172",
            "films": ["https://swapi.info/api/films/1"],
            "created": "2014-12-09T13:50:51.644000Z",
            "url": "https://swapi.info/api/people/1"
        }))
        .expect("deserialize person");

        assert_eq!(record.name, "Luke Skywalker");
        assert_eq!(record.attribute("height"), Some(&json!("172")));
        assert!(record.attribute("name").is_none());
        assert_eq!(record.id().expect("id").as_str(), "1");
    }

    #[test]
    fn test_film_title_becomes_name() {
        let record: EntityRecord = serde_json::from_value(json!({
            "title": "A New Hope",
            "episode_id": 4,
            "created": "2014-12-10T14:23:31.880000Z",
            "url": "https://swapi.info/api/films/1"
        }))
        .expect("deserialize film");

        assert_eq!(record.name, "A New Hope");
        assert_eq!(record.field("title"), Some(FieldValue::Text("A New Hope")));
        assert_eq!(record.field("episode_id"), Some(FieldValue::Json(&json!(4))));
    }

    #[test]
    fn test_record_missing_required_fields_default_empty() {
        let record: EntityRecord =
            serde_json::from_value(json!({ "name": "Yoda" })).expect("deserialize");
        assert_eq!(record.created, "");
        assert_eq!(record.url, "");
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = EntityRecord::new("Tatooine", "09/12/2014, 13:50", "url1")
            .with_attribute("climate", "arid");
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(
            value,
            json!({
                "name": "Tatooine",
                "created": "09/12/2014, 13:50",
                "url": "url1",
                "climate": "arid"
            })
        );
    }

    #[test]
    fn test_field_lookup_treats_null_as_absent() {
        let record = EntityRecord::new("R2-D2", "", "url2")
            .with_attribute("mass", Value::Null)
            .with_attribute("height", 96);

        assert_eq!(record.field("name"), Some(FieldValue::Text("R2-D2")));
        assert_eq!(record.field("mass"), None);
        assert_eq!(record.field("missing"), None);
        assert_eq!(record.field("height"), Some(FieldValue::Json(&json!(96))));
    }
}
