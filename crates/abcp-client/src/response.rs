//! Response classification
//!
//! A pure translation from (method, content type, status, body text) to
//! either the decoded JSON body or a typed error. No I/O happens here,
//! which keeps the whole status table unit-testable with synthetic
//! triples.

use abcp_core::methods::SEARCH_METHODS;
use serde_json::Value;

use crate::error::AbcpError;

const EXPECTED_CONTENT_TYPE: &str = "application/json";

/// Classify a raw response into the decoded body or an error
///
/// # Errors
///
/// - non-JSON content type or undecodable body: `AbcpError::Network`
/// - 400/404 with a structured body: `AbcpError::Api` (or `NotFound` for
///   the search-family methods) carrying `errorMessage`/`errorCode`
/// - 418: `AbcpError::Teapot`
/// - any other non-2xx status: `AbcpError::Api` with the raw body
pub fn classify(
    method: &str,
    content_type: &str,
    status: u16,
    body: &str,
) -> Result<Value, AbcpError> {
    if content_type != EXPECTED_CONTENT_TYPE {
        return Err(AbcpError::Network(format!(
            "invalid response with content type {content_type}: \"{}\"",
            snippet(body)
        )));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| AbcpError::Network(format!("undecodable JSON body: {e}")))?;

    match status {
        200..=226 => Ok(value),
        400 => Err(structured_error(status, &value, false)),
        404 => {
            let not_found = SEARCH_METHODS.contains(&method);
            Err(structured_error(status, &value, not_found))
        }
        401 | 403 | 409 => Err(raw_error(status, &value)),
        418 => Err(AbcpError::Teapot),
        s if s >= 500 => Err(raw_error(status, &value)),
        _ => Err(raw_error(status, &value)),
    }
}

/// Build an error from the structured `errorMessage`/`errorCode` shape,
/// falling back to the raw body when the server omitted the fields
fn structured_error(status: u16, value: &Value, not_found: bool) -> AbcpError {
    let message = value
        .get("errorMessage")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string());
    let code = value
        .get("errorCode")
        .map(|c| match c {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });

    if not_found {
        AbcpError::NotFound {
            status,
            code,
            message,
        }
    } else {
        AbcpError::Api {
            status,
            code,
            message,
        }
    }
}

fn raw_error(status: u16, value: &Value) -> AbcpError {
    AbcpError::Api {
        status,
        code: None,
        message: value.to_string(),
    }
}

fn snippet(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_body_is_network_error() {
        let err = classify("cp/orders", "text/html", 200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, AbcpError::Network(_)));
    }

    #[test]
    fn snippet_respects_char_boundaries() {
        let body = "ошибка ".repeat(100);
        // Must not panic on a multibyte boundary.
        let _ = classify("cp/orders", "text/html", 500, &body).unwrap_err();
    }

    #[test]
    fn bare_boolean_body_is_success() {
        let value = classify("cp/order", "application/json", 200, "true").unwrap();
        assert_eq!(value, Value::Bool(true));
    }
}
