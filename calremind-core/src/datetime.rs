//! Parsing for the string date/time formats stored on appointments.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CalremindError, CalremindResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse YYYY-MM-DD HH:MM
pub fn parse_datetime(s: &str) -> CalremindResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .map_err(|_| CalremindError::InvalidDateTime(s.to_string()))
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

/// Parse HH:MM
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| format!("Invalid time format '{}'. Expected HH:MM", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_reminder_timestamp() {
        let dt = parse_datetime("2024-08-15 12:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 8, 15));
        assert_eq!((dt.hour(), dt.minute()), (12, 0));
    }

    #[test]
    fn rejects_other_timestamp_shapes() {
        assert!(parse_datetime("2024/08/15 10am").is_err());
        assert!(parse_datetime("2024-08-15T12:00").is_err());
        assert!(parse_datetime("2024-08-15").is_err());
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_time("24:00").is_err());
        assert!(parse_datetime("2024-13-01 10:00").is_err());
    }

    #[test]
    fn date_and_time_errors_name_the_input() {
        let err = parse_date("30/07/2024").unwrap_err();
        assert!(err.contains("30/07/2024"));
        assert!(err.contains("YYYY-MM-DD"));

        let err = parse_time("10am").unwrap_err();
        assert!(err.contains("HH:MM"));
    }
}
