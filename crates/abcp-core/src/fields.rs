//! Shared per-method parameter checks
//!
//! The remote API repeats a handful of validation shapes across hundreds
//! of endpoints: a `fields` list restricted to a documented set, a
//! `limit` window, numeric-string ids, and boolean flags that some
//! endpoints want as `true`/`false` and others as `1`/`0`. Endpoint
//! methods share these helpers instead of re-deriving each check.

use crate::error::ParamError;

/// Validate a `fields` selection against the endpoint's documented set
/// and join it into the CSV form the wire expects.
///
/// # Errors
///
/// Returns `ParamError::Invalid` naming the first value outside `allowed`.
pub fn check_fields(fields: &[&str], allowed: &[&str]) -> Result<String, ParamError> {
    for f in fields {
        if !allowed.contains(f) {
            return Err(ParamError::invalid(
                "fields",
                format!("'{f}' is not one of {allowed:?}"),
            ));
        }
    }
    Ok(fields.join(","))
}

/// Validate the common `limit` window (1..=1000)
pub fn check_limit(limit: Option<u32>) -> Result<(), ParamError> {
    match limit {
        Some(l) if l == 0 || l > 1000 => Err(ParamError::invalid(
            "limit",
            format!("{l} is outside 1..=1000"),
        )),
        _ => Ok(()),
    }
}

/// Require a string parameter to be all decimal digits
pub fn check_numeric(name: &str, value: &str) -> Result<(), ParamError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParamError::invalid(name, "must be numeric"));
    }
    Ok(())
}

/// Require an integer parameter to sit inside a documented range
pub fn check_range(name: &str, value: i64, min: i64, max: i64) -> Result<(), ParamError> {
    if value < min || value > max {
        return Err(ParamError::invalid(
            name,
            format!("{value} is outside {min}..={max}"),
        ));
    }
    Ok(())
}

/// Require a value to be one of a documented enum set
pub fn check_in_set(name: &str, value: &str, allowed: &[&str]) -> Result<(), ParamError> {
    if !allowed.contains(&value) {
        return Err(ParamError::invalid(
            name,
            format!("'{value}' is not one of {allowed:?}"),
        ));
    }
    Ok(())
}

/// Boolean as the textual `true`/`false` the legacy endpoints document
pub fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Boolean as the `1`/`0` flag some endpoints document instead
pub fn bool_flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_join_csv() {
        let allowed = ["id", "name", "price"];
        assert_eq!(check_fields(&["name", "id"], &allowed).unwrap(), "name,id");
    }

    #[test]
    fn fields_reject_unknown() {
        let err = check_fields(&["nope"], &["id"]).unwrap_err();
        assert!(matches!(err, ParamError::Invalid { .. }));
    }

    #[test]
    fn limit_window() {
        assert!(check_limit(None).is_ok());
        assert!(check_limit(Some(1)).is_ok());
        assert!(check_limit(Some(1000)).is_ok());
        assert!(check_limit(Some(0)).is_err());
        assert!(check_limit(Some(1001)).is_err());
    }

    #[test]
    fn numeric_check() {
        assert!(check_numeric("user_id", "42").is_ok());
        assert!(check_numeric("user_id", "4a2").is_err());
        assert!(check_numeric("user_id", "").is_err());
    }

    #[test]
    fn bool_forms() {
        assert_eq!(bool_str(true), "true");
        assert_eq!(bool_flag(false), "0");
    }
}
