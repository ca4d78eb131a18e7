use crate::common::{FakeTransport, ROOT, token_client};
use ice_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_endpoint_url() {
    let ice = token_client(FakeTransport::new()).await;
    assert_eq!(ice.endpoint_url("parts/3"), format!("{ROOT}/rest/parts/3"));
    assert_eq!(ice.endpoint_url("/parts/3"), format!("{ROOT}/rest/parts/3"));
    assert!(ice.session().is_token());
    assert_eq!(ice.config().root, ROOT);
}

#[tokio::test]
async fn test_token_headers_on_every_request() {
    let transport = FakeTransport::new().route(Method::GET, "parts/3", 200, r#"{"id": 3}"#);
    let ice = token_client(transport).await;

    ice.get_part_infos(3).await.unwrap();

    let requests = ice.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header(API_TOKEN_HEADER), Some("secret-token"));
    assert_eq!(requests[0].header(API_TOKEN_CLIENT_HEADER), Some("icebot"));
    assert_eq!(requests[0].header("accept"), Some("application/json"));
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_generic_get_decodes_json() {
    let transport = FakeTransport::new().route(Method::GET, "config", 200, r#"{"a": 1}"#);
    let ice = token_client(transport).await;
    let value: Value = ice.get("config").await.unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[tokio::test]
async fn test_empty_body_decodes_as_null() {
    let transport = FakeTransport::new().route(Method::DELETE, "parts/3/sequence", 200, "");
    let ice = token_client(transport).await;
    let value: Value = ice.delete("parts/3/sequence").await.unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn test_remote_error_carries_status_and_body() {
    let transport = FakeTransport::new().route(Method::GET, "parts/3", 500, "database down");
    let ice = token_client(transport).await;

    match ice.get_part_infos(3).await {
        Err(AppError::Remote { status, body }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "database down");
        }
        other => panic!("Expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_forbidden_is_authentication_error() {
    let transport = FakeTransport::new().route(Method::GET, "parts/3", 403, "expired token");
    let ice = token_client(transport).await;
    let result = ice.get_part_infos(3).await;
    assert!(matches!(
        result,
        Err(AppError::Authentication {
            status: StatusCode::FORBIDDEN,
            ..
        })
    ));
}

#[tokio::test]
async fn test_missing_id_is_not_found() {
    let ice = token_client(FakeTransport::new()).await;
    match ice.get_part_infos(999).await {
        Err(e @ AppError::NotFound(_)) => {
            assert_eq!(e.status(), Some(StatusCode::NOT_FOUND));
            assert!(e.to_string().contains("parts/999"));
        }
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let transport = FakeTransport::new().failing(Method::GET, "parts/3", "timed out");
    let ice = token_client(transport).await;
    match ice.get_part_infos(3).await {
        Err(AppError::Transport(msg)) => assert_eq!(msg, "timed out"),
        other => panic!("Expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_json_error() {
    let transport = FakeTransport::new().route(Method::GET, "parts/3", 200, "<html></html>");
    let ice = token_client(transport).await;
    assert!(matches!(
        ice.get_part_infos(3).await,
        Err(AppError::Json(_))
    ));
}

#[tokio::test]
async fn test_get_samples_empty() {
    let transport = FakeTransport::new().route(Method::GET, "parts/7/samples", 200, "[]");
    let ice = token_client(transport).await;
    assert!(ice.get_samples(7).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_samples_null() {
    let transport = FakeTransport::new().route(Method::GET, "parts/7/samples", 200, "");
    let ice = token_client(transport).await;
    assert!(ice.get_samples(7).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_samples() {
    let body = json!([
        {"id": 1, "location": {"type": "PLATE96", "display": "P1", "child": {"type": "WELL", "display": "A01"}}},
        {"id": 2, "location": {"type": "PLATE96", "display": "P2", "child": {"type": "WELL", "display": "H12"}}}
    ]);
    let transport =
        FakeTransport::new().route(Method::GET, "parts/7/samples", 200, &body.to_string());
    let ice = token_client(transport).await;
    let samples = ice.get_samples(7).await.unwrap();
    let locations: Vec<String> = samples.iter().map(Sample::location_string).collect();
    assert_eq!(locations, vec!["P1/A01", "P2/H12"]);
}

#[test]
fn test_client_construction_blocking() {
    let transport = FakeTransport::new().route(Method::GET, "parts/3", 200, r#"{"id": 3}"#);
    let entry = tokio_test::block_on(async {
        let ice = token_client(transport).await;
        ice.get_part_infos(3).await
    })
    .unwrap();
    assert_eq!(entry.id, 3);
}
