use crate::utils::error::{GmtError, Result};
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::LazyLock;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("leading integer pattern"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses raw offset text the way the search box always has: a leading,
/// optionally signed integer is taken and anything after it is ignored.
///
/// Integers too large for `i32` saturate. They are still integers, just
/// far outside the modeled range, so searching with them stays well defined.
pub fn parse_offset_input(input: &str) -> Result<i32> {
    let invalid = || GmtError::InvalidOffsetInput {
        input: input.to_string(),
    };

    let digits = LEADING_INTEGER
        .captures(input)
        .and_then(|caps| caps.get(1))
        .ok_or_else(invalid)?
        .as_str();

    match digits.parse::<i32>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i32::MAX),
            IntErrorKind::NegOverflow => Ok(i32::MIN),
            _ => Err(invalid()),
        },
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GmtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GmtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GmtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GmtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
