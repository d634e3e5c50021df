//! Timestamp helpers.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with millisecond precision.
///
/// This is the format used by `createdAt` / `updatedAt` in schema metadata.
#[inline]
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the Unix epoch.
#[inline]
pub fn timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso_is_utc() {
        let now = now_iso();
        assert!(now.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }

    #[test]
    fn test_timestamp_is_positive() {
        assert!(timestamp_millis() > 0);
    }
}
