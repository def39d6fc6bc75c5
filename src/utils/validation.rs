use crate::utils::error::{Result, SalonError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SalonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SalonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Trims `value` and rejects it when nothing is left.
pub fn require_field<'a>(field_name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SalonError::validation(format!("{} is required", field_name)));
    }
    Ok(value)
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| SalonError::DateTimeError {
        value: value.to_string(),
        expected: "YYYY-MM-DD".to_string(),
    })
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| SalonError::DateTimeError {
            value: value.to_string(),
            expected: "HH:MM".to_string(),
        })
}

pub fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    Ok(parse_date(date)?.and_time(parse_time(time)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.data_file", "salon_data.json").is_ok());
        assert!(validate_path("storage.data_file", "").is_err());
        assert!(validate_path("storage.data_file", "bad\0path").is_err());
    }

    #[test]
    fn test_require_field() {
        assert_eq!(require_field("client name", "  Anna ").unwrap(), "Anna");
        let err = require_field("client phone", "   ").unwrap_err();
        assert!(matches!(err, SalonError::ValidationError { .. }));
        assert_eq!(err.to_string(), "Validation error: client phone is required");
    }

    #[test]
    fn test_parse_date_time() {
        let dt = parse_date_time("2024-05-01", "10:30").unwrap();
        assert_eq!(dt.to_string(), "2024-05-01 10:30:00");
        assert!(parse_time("10:30:15").is_ok());
        assert!(parse_time("25:00").is_err());
        assert!(parse_date("01.05.2024").is_err());
    }
}
