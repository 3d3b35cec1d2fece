//! Route tests for the topology service.

#![cfg(feature = "service")]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use circuit_topology::service::{create_router, ServiceState, TopologyResponse, FINGERPRINT_HEADER};
use serde_json::{json, Value};
use tower::ServiceExt;

const BODY_LIMIT: usize = 1 << 20;

fn app() -> Router {
    create_router(ServiceState::default())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn hub_payload() -> Value {
    json!([{
        "PRODUCT_TYPE": "MPLS",
        "CIRCUIT_ID": "C1",
        "SITE_ID_A": "S1",
        "BUILDING_A": "BuildingHQ",
        "SITE_ID_B": "S2",
        "BUILDING_B": "Building2"
    }])
}

#[tokio::test]
async fn test_topology_endpoint() {
    let response = app().oneshot(post_json("/api/topology", hub_payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let body: TopologyResponse = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body.topology.nodes.len(), 3);
    assert_eq!(body.topology.edges.len(), 2);
    assert!(body.topology.edges.iter().all(|e| e.labels == vec!["MPLS [C1]".to_string()]));
    assert_eq!(body.topology.fingerprint.len(), 16);
    assert_eq!(body.policy_hash, ServiceState::default().policy_hash());
}

#[tokio::test]
async fn test_diagram_endpoint_returns_svg() {
    let response = app().oneshot(post_json("/api/diagram", hub_payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=network_diagram.svg"
    );
    assert_eq!(response.headers()[FINGERPRINT_HEADER].len(), 16);

    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let svg = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("MPLS [C1]"));
}

#[tokio::test]
async fn test_generate_diagram_alias() {
    let response = app().oneshot(post_json("/generate-diagram", json!([]))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let payload = json!([{"PRODUCT_TYPE": "MPLS", "SITE_ID_A": "S1", "BUILDING_A": "HQ"}]);
    let response = app().oneshot(post_json("/api/topology", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"], "record 0");
}

#[tokio::test]
async fn test_malformed_field_is_rejected() {
    let payload = json!([
        {"PRODUCT_TYPE": "MPLS", "CIRCUIT_ID": "C1", "SITE_ID_A": "S1", "BUILDING_A": "HQ"},
        {"PRODUCT_TYPE": "MPLS", "CIRCUIT_ID": "C2", "SITE_ID_A": {"id": 2}, "BUILDING_A": "B"}
    ]);
    let response = app().oneshot(post_json("/api/diagram", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_RECORD");
    assert_eq!(body["details"], "record 1");
}

async fn error_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_non_object_row_is_bad_request() {
    for uri in ["/api/topology", "/api/diagram", "/generate-diagram"] {
        let response = app().oneshot(post_json(uri, json!([42]))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let body = error_body(response).await;
        assert_eq!(body["code"], "MALFORMED_RECORD", "{}", uri);
        assert!(body["details"].is_string());
    }
}

#[tokio::test]
async fn test_string_row_and_duplicate_keys_are_bad_request() {
    let string_row = app().oneshot(post_json("/api/topology", json!(["MPLS,C1,S1"]))).await.unwrap();
    assert_eq!(string_row.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(string_row).await["code"], "MALFORMED_RECORD");

    // Upper-case key and its camelCase alias name the same field.
    let request = Request::builder()
        .method("POST")
        .uri("/api/topology")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"[{"PRODUCT_TYPE":"MPLS","productType":"VPN","CIRCUIT_ID":"C1","SITE_ID_A":"S1","BUILDING_A":"HQ"}]"#,
        ))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await["code"], "MALFORMED_RECORD");
}

#[tokio::test]
async fn test_invalid_json_and_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/diagram")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[{"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await["code"], "MALFORMED_RECORD");

    let request = Request::builder()
        .method("POST")
        .uri("/api/topology")
        .body(Body::from("[]"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_health_probes() {
    for uri in ["/health", "/health/live", "/health/ready"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
    }
}
