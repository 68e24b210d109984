//! Dispatcher tests over an in-memory transport

use std::sync::{Arc, Mutex};

use abcp_client::api::admin::SaveOrder;
use abcp_client::core::payload::Payload;
use abcp_client::core::{Credentials, ParamError};
use abcp_client::{Abcp, AbcpError, HttpTransport, RawResponse, TransportError};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;

const PSW: &str = "61c0cd30306ab9fbcef92d8a3bd1a4cb";

type Call = (String, Vec<(String, String)>, bool);

/// Records every call and replays a canned response. Clones share the
/// call log, so the test keeps a handle while the client owns another.
#[derive(Clone)]
struct MockTransport {
    calls: Arc<Mutex<Vec<Call>>>,
    body: String,
    fail: bool,
}

impl MockTransport {
    fn ok(body: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            body: body.to_string(),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            body: String::new(),
            fail: true,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        url: &str,
        pairs: &[(String, String)],
        post: bool,
    ) -> Result<RawResponse, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), pairs.to_vec(), post));
        if self.fail {
            return Err(TransportError("connection refused".to_string()));
        }
        Ok(RawResponse {
            status: 200,
            content_type: "application/json".to_string(),
            body: self.body.clone(),
        })
    }
}

fn admin_client(body: &str) -> (Abcp<MockTransport>, MockTransport) {
    let creds = Credentials::new("id200.public.api.abcp.ru", "api@id200", PSW).unwrap();
    let transport = MockTransport::ok(body);
    (Abcp::with_transport(creds, transport.clone()), transport)
}

fn regular_client(body: &str) -> (Abcp<MockTransport>, MockTransport) {
    let creds = Credentials::new("id200.public.api.abcp.ru", "12345678", PSW).unwrap();
    let transport = MockTransport::ok(body);
    (Abcp::with_transport(creds, transport.clone()), transport)
}

#[tokio::test]
async fn auth_pairs_appended_to_every_request() {
    let (abcp, transport) = regular_client("[]");
    abcp.client().search().tips("3333").await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    let (url, pairs, post) = &calls[0];
    assert_eq!(url, "https://id200.public.api.abcp.ru/search/tips");
    assert!(!post);
    assert_eq!(
        pairs.as_slice(),
        &[
            ("number".to_string(), "3333".to_string()),
            ("userlogin".to_string(), "12345678".to_string()),
            ("userpsw".to_string(), PSW.to_string()),
        ]
    );
}

#[tokio::test]
async fn post_endpoints_use_form_body() {
    let (abcp, transport) = regular_client("true");
    abcp.client()
        .basket()
        .add(
            vec![vec![
                ("brand".to_string(), "Febi".to_string()),
                ("number".to_string(), "02341".to_string()),
                ("quantity".to_string(), "2".to_string()),
            ]],
            None,
        )
        .await
        .unwrap();

    let calls = transport.calls();
    let (url, pairs, post) = &calls[0];
    assert_eq!(url, "https://id200.public.api.abcp.ru/basket/add");
    assert!(post);
    assert_eq!(
        pairs[0],
        ("positions[0][brand]".to_string(), "Febi".to_string())
    );
}

#[tokio::test]
async fn admin_path_refused_without_admin_rights() {
    let (abcp, transport) = regular_client("[]");
    let err = abcp.admin().statuses().list().await.unwrap_err();
    assert!(matches!(err, AbcpError::NotEnoughRights(path) if path == "cp/statuses"));
    // Guard fires before any I/O.
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn admin_path_allowed_with_admin_rights() {
    let (abcp, transport) = admin_client("[]");
    let value = abcp.admin().statuses().list().await.unwrap();
    assert_eq!(value, json!([]));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn transport_failure_maps_to_network_error() {
    let creds = Credentials::new("id200.public.api.abcp.ru", "12345678", PSW).unwrap();
    let abcp = Abcp::with_transport(creds, MockTransport::failing());
    let err = abcp.client().user().info().await.unwrap_err();
    match err {
        AbcpError::Network(msg) => assert!(msg.contains("connection refused")),
        other => panic!("expected Network error, got {other:?}"),
    }
}

#[tokio::test]
async fn note_and_del_note_are_mutually_exclusive() {
    let (abcp, transport) = admin_client("true");
    let order = SaveOrder {
        number: Some(500),
        note: Some("call first".to_string()),
        del_note: Some("99".to_string()),
        ..Default::default()
    };
    let err = abcp.admin().orders().save(order).await.unwrap_err();
    assert!(matches!(
        err,
        AbcpError::Parameter(ParamError::MutuallyExclusive(_, _))
    ));
    // Rejected before any payload reaches the wire.
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn order_save_wraps_keys_in_order_envelope() {
    let (abcp, transport) = admin_client("true");
    let order = SaveOrder {
        number: Some(500),
        order_positions: Some(vec![vec![
            ("id".to_string(), "1".to_string()),
            ("quantity".to_string(), "2".to_string()),
        ]]),
        ..Default::default()
    };
    abcp.admin().orders().save(order).await.unwrap();

    let calls = transport.calls();
    let (_, pairs, post) = &calls[0];
    assert!(post);
    assert_eq!(pairs[0], ("order[number]".to_string(), "500".to_string()));
    assert_eq!(
        pairs[1],
        ("order[positions][0][id]".to_string(), "1".to_string())
    );
    assert_eq!(
        pairs[2],
        ("order[positions][0][quantity]".to_string(), "2".to_string())
    );
}

#[tokio::test]
async fn advices_batch_sends_articles_as_json_array() {
    let (abcp, transport) = regular_client("[]");
    abcp.client()
        .search()
        .advices_batch(
            vec![vec![
                ("brand".to_string(), "Kyb".to_string()),
                ("number".to_string(), "333305".to_string()),
            ]],
            Some(5),
        )
        .await
        .unwrap();

    let calls = transport.calls();
    let (url, pairs, post) = &calls[0];
    assert_eq!(url, "https://id200.public.api.abcp.ru/advices/batch");
    assert!(post);
    assert_eq!(
        pairs[0],
        (
            "articles".to_string(),
            r#"[{"brand":"Kyb","number":"333305"}]"#.to_string()
        )
    );
    assert_eq!(pairs[1], ("limit".to_string(), "5".to_string()));
}

#[tokio::test]
async fn order_fields_selector_joins_csv() {
    let (abcp, transport) = admin_client("{}");
    abcp.ts_admin()
        .orders()
        .get(7, Some(&["posInfo", "tags"]))
        .await
        .unwrap();

    let calls = transport.calls();
    let (_, pairs, _) = &calls[0];
    assert_eq!(pairs[0], ("orderId".to_string(), "7".to_string()));
    assert_eq!(pairs[1], ("fields".to_string(), "posInfo,tags".to_string()));
}

#[tokio::test]
async fn order_fields_selector_rejects_unknown_field() {
    let (abcp, transport) = admin_client("{}");
    let err = abcp
        .ts_admin()
        .orders()
        .get(7, Some(&["bogus"]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AbcpError::Parameter(ParamError::Invalid { .. })
    ));
    assert!(err.to_string().contains("fields"));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn parameter_errors_name_the_parameter() {
    let (abcp, transport) = regular_client("[]");
    let err = abcp
        .client()
        .search()
        .advices("Kyb", "333305", Some(5000))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("limit"));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn raw_request_passes_payload_through() {
    let (abcp, _transport) = regular_client(r#"{"ok":true}"#);
    let payload = Payload::new().field("user_id", 7).encode();
    let value = abcp.request("orders/list", payload, false).await.unwrap();
    assert_eq!(value, json!({"ok": true}));
}
