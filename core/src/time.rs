//! Time related utils.
//!
//! SNAP endpoints expect `X-TIMESTAMP` values in ISO-8601 with a numeric
//! offset, e.g. `2024-01-01T00:00:00+07:00`. The same string is embedded in
//! both canonical strings, so formatting lives here in one place.

use crate::{Error, Result};
use chrono::{FixedOffset, Local, SecondsFormat};

/// Timestamp carried through signing, with its original UTC offset.
pub type Timestamp = chrono::DateTime<FixedOffset>;

/// Current time in the local offset.
pub fn now() -> Timestamp {
    Local::now().fixed_offset()
}

/// Format a timestamp as ISO-8601 with numeric offset and second precision.
pub fn format_timestamp(t: Timestamp) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parse an ISO-8601 timestamp with offset.
pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::argument_invalid(format!("invalid timestamp {s:?}")).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_round_trip() {
        let t = parse_timestamp("2024-01-01T00:00:00+07:00").unwrap();
        assert_eq!(format_timestamp(t), "2024-01-01T00:00:00+07:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_now_formats_with_offset() {
        let s = format_timestamp(now());
        // "2024-01-01T00:00:00+07:00" is 25 chars; "Z" suffixes are not
        // produced because use_z is disabled.
        assert_eq!(s.len(), 25);
        assert!(!s.ends_with('Z'));
    }
}
