//! Contract Test: POST /endpoints/{id}

use crate::support::registry::{build_app, endpoint_json, get, post_json, post_raw, send};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_then_read() {
    let test = build_app();
    let payload = endpoint_json("my-canary");

    let (status, body) = send(&test.app, post_json("/endpoints/my-canary", &payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());

    let (status, body) = send(&test.app, get("/endpoints/my-canary")).await;
    assert_eq!(status, StatusCode::OK);
    let stored: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(stored, payload);
}

#[tokio::test]
async fn test_url_is_returned_as_posted() {
    let test = build_app();
    let mut payload = endpoint_json("my-canary");
    payload["url"] = json!("https://Example.com");

    let (status, _) = send(&test.app, post_json("/endpoints/my-canary", &payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&test.app, get("/endpoints/my-canary")).await;
    assert_eq!(status, StatusCode::OK);
    let stored: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(stored, payload);
}

#[tokio::test]
async fn test_body_identifier_must_satisfy_grammar() {
    let test = build_app();
    let (status, body) = send(
        &test.app,
        post_json("/endpoints/my-canary", &endpoint_json("My_Canary")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "Malformed request body");
    assert_eq!(test.store.hash_count().await, 0);
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let test = build_app();
    send(
        &test.app,
        post_json("/endpoints/my-canary", &endpoint_json("my-canary")),
    )
    .await;

    let changed = json!({
        "identifier": "my-canary",
        "url": "http://internal.test/ping",
        "method": "HEAD",
        "status_online": 204,
        "frequency": "5m0s",
        "fail_after": 1
    });
    let (status, body) = send(&test.app, post_json("/endpoints/my-canary", &changed)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, body) = send(&test.app, get("/endpoints/my-canary")).await;
    let stored: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(stored, changed);
    assert_eq!(test.store.hash_count().await, 1);
}

#[tokio::test]
async fn test_frequency_is_stored_canonically() {
    let test = build_app();
    let mut payload = endpoint_json("slow-check");
    payload["frequency"] = json!("90s");

    let (status, _) = send(&test.app, post_json("/endpoints/slow-check", &payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&test.app, get("/endpoints/slow-check")).await;
    let stored: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(stored["frequency"], "1m30s");
}

#[tokio::test]
async fn test_identity_mismatch_stores_nothing() {
    let test = build_app();

    let (status, body) = send(&test.app, post_json("/endpoints/foo", &endpoint_json("bar"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "Identifier in path and body differ");

    assert_eq!(test.store.hash_count().await, 0);
    let (status, _) = send(&test.app, get("/endpoints/foo")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&test.app, get("/endpoints/bar")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_identifier_is_rejected() {
    let test = build_app();
    for path in [
        "/endpoints/",
        "/endpoints/My-Canary",
        "/endpoints/-leading",
        "/endpoints/a",
        "/endpoints/has_underscore",
        "/endpoints/nested/path",
    ] {
        let (status, _) = send(&test.app, post_json(path, &endpoint_json("my-canary"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
    }
    assert_eq!(test.store.hash_count().await, 0);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let test = build_app();
    let mut missing_method = endpoint_json("my-canary");
    missing_method.as_object_mut().unwrap().remove("method");
    let mut big_status = endpoint_json("my-canary");
    big_status["status_online"] = json!(70000);

    for body in [
        String::new(),
        "{not json".to_string(),
        "[]".to_string(),
        missing_method.to_string(),
        big_status.to_string(),
    ] {
        let (status, response) = send(&test.app, post_raw("/endpoints/my-canary", body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        let error: Value = serde_json::from_slice(&response).unwrap();
        assert_eq!(error["error"], "Malformed request body");
    }
    assert_eq!(test.store.hash_count().await, 0);
}
