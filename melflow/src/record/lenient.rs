//! Tolerant field decoders.
//!
//! Optional fields with an unexpected JSON type fall back to their default
//! instead of failing the whole record.

use super::ids::identifier_text;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(super) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

pub(super) fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(int_value(&Value::deserialize(deserializer)?).unwrap_or(0))
}

/// Whole seconds; negative values clamp to zero.
pub(super) fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = int_value(&Value::deserialize(deserializer)?).unwrap_or(0);
    Ok(u64::try_from(value).unwrap_or(0))
}

pub(super) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1"),
        _ => false,
    })
}

pub(super) fn optional_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(identifier_text(&Value::deserialize(deserializer)?).map(T::from))
}

/// Non-blank text, or a non-zero number in its textual form.
pub(super) fn optional_stamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() > f64::EPSILON) => {
            Some(n.to_string())
        }
        _ => None,
    })
}

/// A list whose elements must decode; `null` or a non-array is empty.
pub(super) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Like [`list`], but a non-object element becomes an edge with no successor.
///
/// Element positions are kept so the first edge stays the first edge.
pub(super) fn edges<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item).map_err(de::Error::custom),
                _ => Ok(T::default()),
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
