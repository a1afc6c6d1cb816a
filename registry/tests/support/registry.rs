//! インメモリストアでレジストリアプリを組み立てる

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use meow_registry::{
    api, db::memory::MemoryStore, registry::endpoints::EndpointRegistry, AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// テスト用アプリと裏側のストア
#[allow(dead_code)]
pub struct TestApp {
    pub app: Router,
    pub store: MemoryStore,
}

/// 空のストアでアプリを作成
pub fn build_app() -> TestApp {
    let store = MemoryStore::new();
    let state = AppState {
        endpoint_registry: EndpointRegistry::new(Arc::new(store.clone())),
    };
    TestApp {
        app: api::create_app(state),
        store,
    }
}

/// 標準的なエンドポイントJSON
pub fn endpoint_json(identifier: &str) -> Value {
    json!({
        "identifier": identifier,
        "url": format!("https://{identifier}.example.com/health"),
        "method": "GET",
        "status_online": 200,
        "frequency": "30s",
        "fail_after": 3
    })
}

/// リクエストを送り、ステータスと生ボディを返す
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// GETリクエストを作成
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// JSONボディ付きPOSTリクエストを作成
#[allow(dead_code)]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

/// 任意ボディのPOSTリクエストを作成
#[allow(dead_code)]
pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}
