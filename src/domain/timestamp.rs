//! Lenient timestamp reading for the interchange document.
//!
//! Writers emit RFC 3339, but older fetchers wrote local times without an
//! offset, and some sources send `null`. Anything unreadable becomes the
//! default timestamp instead of failing the whole document.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn raw_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => {
            tracing::debug!(value = %other, "ignoring non-string timestamp");
            None
        }
    })
}

/// RFC 3339 first, then a naive ISO-8601 date-time
fn parse_with<Tz: TimeZone>(raw: &str, naive_in: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(naive_in));
    }

    let parsed = raw
        .parse::<NaiveDateTime>()
        .ok()
        .and_then(|naive| naive_in.from_local_datetime(&naive).earliest());

    if parsed.is_none() {
        tracing::debug!(raw, "unparseable timestamp, using default");
    }
    parsed
}

/// Offset-less values are taken as local time
pub fn local_or_default<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(raw_string(deserializer)?
        .and_then(|raw| parse_with(&raw, &Local))
        .unwrap_or_default())
}

/// Offset-less values are taken as UTC
pub fn utc_or_default<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(raw_string(deserializer)?
        .and_then(|raw| parse_with(&raw, &Utc))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(deserialize_with = "utc_or_default")]
        at: DateTime<Utc>,
    }

    fn read(json: &str) -> DateTime<Utc> {
        serde_json::from_str::<Stamped>(json).unwrap().at
    }

    #[test]
    fn test_rfc3339_is_converted() {
        let at = read(r#"{"at": "2025-12-12T10:00:00+02:00"}"#);
        assert_eq!(at.hour(), 8);
    }

    #[test]
    fn test_naive_with_fraction() {
        let at = read(r#"{"at": "2025-12-12T09:00:00.123456"}"#);
        assert_eq!((at.day(), at.hour()), (12, 9));
        assert_eq!(at.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_null_and_garbage_use_default() {
        assert_eq!(read(r#"{"at": null}"#), DateTime::<Utc>::default());
        assert_eq!(read(r#"{"at": "yesterday"}"#), DateTime::<Utc>::default());
        assert_eq!(read(r#"{"at": 1734000000}"#), DateTime::<Utc>::default());
    }
}
