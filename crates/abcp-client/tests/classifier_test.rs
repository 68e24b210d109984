//! Response classifier tests against synthetic (status, content type,
//! body) triples

use abcp_client::{classify, AbcpError};
use serde_json::json;

const JSON: &str = "application/json";

#[test]
fn whole_success_range_passes_body_through() {
    for status in [200, 201, 204, 218, 226] {
        let value = classify("cp/orders", JSON, status, r#"[{"number": 1}]"#).unwrap();
        assert_eq!(value, json!([{"number": 1}]));
    }
}

#[test]
fn status_227_is_not_success() {
    let err = classify("cp/orders", JSON, 227, "{}").unwrap_err();
    assert!(matches!(err, AbcpError::Api { status: 227, .. }));
}

#[test]
fn structured_400_carries_message_and_code() {
    let body = r#"{"errorMessage":"Bad argument","errorCode":"E400"}"#;
    let err = classify("cp/orders", JSON, 400, body).unwrap_err();
    match err {
        AbcpError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code.as_deref(), Some("E400"));
            assert_eq!(message, "Bad argument");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn structured_404_carries_message_and_code() {
    let body = r#"{"errorMessage":"Not found","errorCode":"E404"}"#;
    let err = classify("cp/order", JSON, 404, body).unwrap_err();
    match err {
        AbcpError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code.as_deref(), Some("E404"));
            assert!(message.contains("Not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn search_methods_get_not_found_on_404() {
    let body = r#"{"errorMessage":"Nothing found","errorCode":301}"#;
    let err = classify("search/brands", JSON, 404, body).unwrap_err();
    match err {
        AbcpError::NotFound { status, code, .. } => {
            assert_eq!(status, 404);
            assert_eq!(code.as_deref(), Some("301"));
        }
        other => panic!("expected NotFound error, got {other:?}"),
    }
}

#[test]
fn unstructured_errors_keep_raw_body() {
    for status in [401, 403, 409, 500, 502] {
        let err = classify("cp/orders", JSON, status, r#""maintenance""#).unwrap_err();
        match err {
            AbcpError::Api {
                status: s, message, ..
            } => {
                assert_eq!(s, status);
                assert!(message.contains("maintenance"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}

#[test]
fn teapot_is_distinct() {
    let err = classify("cp/orders", JSON, 418, "{}").unwrap_err();
    assert!(matches!(err, AbcpError::Teapot));
}

#[test]
fn non_json_content_type_is_network_error() {
    let err = classify("cp/orders", "text/html", 200, "<html>login</html>").unwrap_err();
    match err {
        AbcpError::Network(msg) => {
            assert!(msg.contains("text/html"));
            assert!(msg.contains("<html>login</html>"));
        }
        other => panic!("expected Network error, got {other:?}"),
    }
}

#[test]
fn undecodable_body_is_network_error() {
    let err = classify("cp/orders", JSON, 200, "{not json").unwrap_err();
    assert!(matches!(err, AbcpError::Network(_)));
}

#[test]
fn error_display_mirrors_wire_fields() {
    let body = r#"{"errorMessage":"Not found","errorCode":"E404"}"#;
    let err = classify("cp/order", JSON, 404, body).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("Not found"));
    assert!(text.contains("E404"));
    assert!(text.contains("404"));
}
