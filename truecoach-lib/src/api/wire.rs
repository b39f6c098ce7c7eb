//! Serde helpers for the TrueCoach wire format.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Pagination block returned next to collection payloads.
///
/// Only the page the server chose to return is ever decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub page: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub total_count: u64,
}

/// Body the API sends instead of a payload when a request is rejected.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default, deserialize_with = "nullable")]
    error: String,
}

/// Returns the message carried by an error envelope, if `body` is one.
///
/// Bodies that are not JSON objects, or objects without a non-empty `error` field, are not
/// error envelopes.
#[must_use]
pub fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error)
        .filter(|message| !message.is_empty())
}

/// Deserializes a value that may be `null`, substituting the type's default.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes an assessment value into its trimmed textual form.
///
/// The API wraps values in stray quotes and whitespace. Numbers are accepted and rendered as
/// their decimal text, `null` becomes the empty string.
pub fn padded_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    };

    Ok(strip_padding(&raw).to_string())
}

/// Removes surrounding whitespace and quote characters.
#[must_use]
pub fn strip_padding(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

/// Deserializes a `YYYY-MM-DD` calendar date, treating `null` and `""` as absent.
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let text = strip_padding(&text);
    if text.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid date '{text}': {e}")))
}

/// Deserializes a timestamp given either in RFC 3339 form or as a bare `YYYY-MM-DD` date.
///
/// Bare dates are taken as midnight UTC and `null` as the Unix epoch. Pair with
/// `#[serde(default)]` so an absent field is the epoch too.
pub fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(DateTime::UNIX_EPOCH);
    };

    parse_timestamp(&text).map_err(serde::de::Error::custom)
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, String> {
    let text = strip_padding(text);

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| format!("invalid timestamp '{text}': {e}"))
}
