//! Reusable field validators
//!
//! Validators operate on raw JSON values so that form-style input (numbers
//! arriving as strings) can be checked before the draft is turned into a
//! typed order.

use serde_json::Value;

/// Validator: field is a non-empty string
pub fn required_text() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(format!("'{}' is required", field)),
    }
}

/// Validator: value parses as an integer within the inclusive range
///
/// Accepts JSON numbers as well as numeric strings. Floats with a
/// fractional part and non-numeric strings are rejected.
pub fn int_in_range(
    min: i64,
    max: i64,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        let parsed = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        match parsed {
            Some(n) if (min..=max).contains(&n) => Ok(()),
            Some(n) => Err(format!(
                "'{}' must be between {} and {} (value: {})",
                field, min, max, n
            )),
            None => Err(format!("'{}' must be an integer", field)),
        }
    }
}

/// Parse an integer out of a JSON number or numeric string
///
/// Companion to [`int_in_range`]: call it only after validation passed.
pub fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
