//! Serde helpers for HTML form fields.
//!
//! Browsers submit every input as a string, including empty ones, and
//! `<input type="time">` omits seconds.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer};

/// Treat a blank field as `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Accept `HH:MM:SS` as well as the `HH:MM` sent by time inputs.
pub fn time_with_optional_seconds<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
        .map_err(|e| serde::de::Error::custom(format!("invalid time '{raw}': {e}")))
}
