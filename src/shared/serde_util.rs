//! Custom serde helpers for backend wire formats.

/// Deserializes `null` as the type's default value.
///
/// The backend serializes empty collections as `null` for orders that were
/// created without line items.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Parses the backend's local date-time strings (`2024-03-01T12:30:00`,
/// optionally with fractional seconds, a space separator or an offset).
pub fn parse_local_datetime(raw: &str) -> Option<chrono::NaiveDateTime> {
    use chrono::{DateTime, NaiveDateTime};

    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_local_datetime_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(parse_local_datetime("2024-03-01T12:30:00"), Some(expected));
        assert_eq!(parse_local_datetime("2024-03-01 12:30:00"), Some(expected));
        assert_eq!(parse_local_datetime("2024-03-01T12:30"), Some(expected));
        assert_eq!(parse_local_datetime("2024-03-01T12:30:00+03:00"), Some(expected));
    }

    #[test]
    fn test_parse_local_datetime_fractional_seconds() {
        let parsed = parse_local_datetime("2024-03-01T12:30:00.250").unwrap();
        assert_eq!(parsed.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_local_datetime_rejects_garbage() {
        assert_eq!(parse_local_datetime(""), None);
        assert_eq!(parse_local_datetime("yesterday"), None);
    }
}
