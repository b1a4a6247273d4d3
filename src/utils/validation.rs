use crate::utils::error::{GymError, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

fn national_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{6,12}$").unwrap())
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9 +-]+$").unwrap())
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

pub fn validate_national_id(value: &str) -> Result<()> {
    if !national_id_re().is_match(value) {
        return Err(GymError::InvalidArgument {
            field: "national_id".to_string(),
            value: value.to_string(),
            reason: "Must be 6 to 12 digits".to_string(),
        });
    }
    Ok(())
}

pub fn validate_name(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GymError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<()> {
    if value.is_empty() || !phone_re().is_match(value) {
        return Err(GymError::InvalidArgument {
            field: "phone".to_string(),
            value: value.to_string(),
            reason: "Only digits, spaces, '+' and '-' are allowed".to_string(),
        });
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<()> {
    if !email_re().is_match(value) {
        return Err(GymError::InvalidArgument {
            field: "email".to_string(),
            value: value.to_string(),
            reason: "Not a valid email address".to_string(),
        });
    }
    Ok(())
}

pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| GymError::InvalidArgument {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected YYYY-MM-DD: {}", e),
    })
}

pub fn parse_time(field_name: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| GymError::InvalidArgument {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected HH:MM: {}", e),
    })
}

pub fn parse_capacity(field_name: &str, value: &str) -> Result<u32> {
    let parsed: u32 = value.trim().parse().map_err(|_| GymError::InvalidArgument {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Expected a positive integer".to_string(),
    })?;
    if parsed == 0 {
        return Err(GymError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be at least 1".to_string(),
        });
    }
    Ok(parsed)
}
