use lazy_static::lazy_static;
use regex::Regex;
use serde_json::json;

use crate::errors::FieldError;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid");
}

/// Field validators. Each appends a violation instead of returning early so
/// every failing field of a payload is reported in one response.

pub fn require_non_blank(violations: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(FieldError::new(
            field,
            "must not be blank",
            Some(json!(value)),
        ));
    }
}

/// Blank values are left to `require_non_blank`; only the shape is checked.
pub fn require_email(violations: &mut Vec<FieldError>, field: &str, value: &str) {
    if !value.trim().is_empty() && !EMAIL.is_match(value) {
        violations.push(FieldError::new(
            field,
            "must be a well-formed email address",
            Some(json!(value)),
        ));
    }
}

pub fn require_max_length(
    violations: &mut Vec<FieldError>,
    field: &str,
    value: &str,
    max: usize,
) {
    if value.chars().count() > max {
        violations.push(FieldError::new(
            field,
            &format!("length must not exceed {}", max),
            Some(json!(value)),
        ));
    }
}

pub fn require_exact_digits(
    violations: &mut Vec<FieldError>,
    field: &str,
    value: &str,
    length: usize,
) {
    let digits_only = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
    if !value.trim().is_empty() && (!digits_only || value.chars().count() != length) {
        violations.push(FieldError::new(
            field,
            &format!("must be exactly {} digits", length),
            Some(json!(value)),
        ));
    }
}
