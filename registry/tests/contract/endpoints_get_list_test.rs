//! Contract Test: GET /endpoints

use crate::support::registry::{build_app, endpoint_json, get, post_json, send};
use axum::http::StatusCode;
use meow_registry::db::traits::EndpointStore;
use serde_json::Value;

#[tokio::test]
async fn test_list_empty() {
    let test = build_app();
    let (status, body) = send(&test.app, get("/endpoints")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(listed, Value::Array(vec![]));
}

#[tokio::test]
async fn test_list_matches_direct_reads() {
    let test = build_app();
    for identifier in ["a-b", "c-d"] {
        let (status, _) = send(
            &test.app,
            post_json(&format!("/endpoints/{identifier}"), &endpoint_json(identifier)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    // 接続確認キーは一覧に含まれない
    test.store.set("purpose", "meow").await.unwrap();

    let (status, body) = send(&test.app, get("/endpoints")).await;
    assert_eq!(status, StatusCode::OK);
    let mut listed: Vec<Value> = serde_json::from_slice(&body).unwrap();
    listed.sort_by(|a, b| a["identifier"].as_str().cmp(&b["identifier"].as_str()));
    assert_eq!(listed.len(), 2);

    for entry in listed {
        let identifier = entry["identifier"].as_str().unwrap().to_string();
        let (status, body) = send(&test.app, get(&format!("/endpoints/{identifier}"))).await;
        assert_eq!(status, StatusCode::OK);
        let direct: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(entry, direct);
    }
}

#[tokio::test]
async fn test_list_fails_on_corrupted_record() {
    let test = build_app();
    send(&test.app, post_json("/endpoints/a-b", &endpoint_json("a-b"))).await;
    test.store
        .insert_raw_hash(
            "endpoints:broken",
            &[
                ("identifier", "broken"),
                ("url", "https://broken.example.com/"),
                ("status_online", "200"),
                ("frequency", "30s"),
                ("fail_after", "3"),
            ],
        )
        .await;

    let (status, body) = send(&test.app, get("/endpoints")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "Internal server error");
}
