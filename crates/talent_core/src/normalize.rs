//! Boundary decoding for listing fields that arrive in more than one shape.
//!
//! The search index flattens structured values before storing them, so the
//! same field can come back as an object or a JSON string (`location`), as an
//! array or a comma separated string (`skills`, `workMode`), or as a number or
//! numeric text (`salary`). Each shape is captured by an untagged enum and
//! folded into its canonical value exactly once.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::map::REFERENCE_CENTER;
use crate::model::Location;

/// City used when a listing carries no location at all.
pub const UNKNOWN_CITY: &str = "Unknown";

/// A location as found on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawLocation {
    Structured(LocationFields),
    Text(String),
    Other(Value),
}

/// Object form of a location. Every field is optional so that partially
/// populated records still decode.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LocationFields {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub distance: Option<FlexibleNumber>,
    #[serde(default)]
    pub lat: Option<FlexibleNumber>,
    #[serde(default)]
    pub lng: Option<FlexibleNumber>,
}

/// A list of short labels: either a real array or a comma separated string.
///
/// Array elements are kept as raw values so one stray non-string entry does
/// not discard the rest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Items(Vec<Value>),
    Text(String),
    Other(Value),
}

/// A number that may have been stringified upstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlexibleNumber {
    Number(f64),
    Text(String),
    Other(Value),
}

impl FlexibleNumber {
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Listing identifiers are numeric in the catalog and may be strings elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Integral numbers (including `2.0`) become [`ListingId::Number`], other
/// numbers and strings become [`ListingId::Text`], anything else is dropped.
pub fn normalize_id(raw: Option<Value>) -> Option<ListingId> {
    match raw? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => ListingId::Number(i),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    ListingId::Number(f as i64)
                }
                _ => ListingId::Text(n.to_string()),
            },
        }),
        Value::String(s) => Some(ListingId::Text(s)),
        _ => None,
    }
}

/// Normalize any location shape into a fully populated [`Location`].
///
/// Never fails: undecodable input degrades to a bare city name (for text) or
/// the "Unknown" location (for anything else).
pub fn normalize_location(raw: Option<RawLocation>) -> Location {
    match raw {
        Some(RawLocation::Structured(fields)) => location_from_fields(fields),
        Some(RawLocation::Text(text)) => match serde_json::from_str::<LocationFields>(&text) {
            Ok(fields) => location_from_fields(fields),
            Err(_) => Location {
                city: text,
                distance: 0.0,
                lat: REFERENCE_CENTER.lat,
                lng: REFERENCE_CENTER.lng,
            },
        },
        Some(RawLocation::Other(_)) | None => Location::default(),
    }
}

fn location_from_fields(fields: LocationFields) -> Location {
    let number = |n: Option<FlexibleNumber>| n.as_ref().and_then(FlexibleNumber::value);
    Location {
        city: fields.city.unwrap_or_else(|| UNKNOWN_CITY.to_string()),
        distance: number(fields.distance).unwrap_or(0.0).max(0.0),
        lat: number(fields.lat).unwrap_or(REFERENCE_CENTER.lat),
        lng: number(fields.lng).unwrap_or(REFERENCE_CENTER.lng),
    }
}

/// Normalize a list field.
///
/// String elements of arrays are returned unchanged and other elements are
/// skipped; strings are split on commas with each segment trimmed and empty
/// segments dropped; anything else is empty.
pub fn normalize_list(raw: Option<StringList>) -> Vec<String> {
    match raw {
        Some(StringList::Items(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(StringList::Text(text)) => split_list(&text),
        Some(StringList::Other(_)) | None => Vec::new(),
    }
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Number or numeric text, `0.0` when absent or unparsable.
pub fn normalize_number(raw: Option<FlexibleNumber>) -> f64 {
    raw.as_ref().and_then(FlexibleNumber::value).unwrap_or(0.0)
}

/// Free text that upstream may have stored as a number or bool.
pub fn normalize_text(raw: Option<Value>) -> String {
    match raw {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
