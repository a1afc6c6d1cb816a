//! Contract Test: 未対応メソッド

use crate::support::registry::{build_app, send};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_unsupported_methods_on_detail_route() {
    let test = build_app();
    for method in ["DELETE", "PUT", "PATCH"] {
        let (status, _) = send(&test.app, request(method, "/endpoints/my-canary")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

#[tokio::test]
async fn test_unsupported_methods_on_list_route() {
    let test = build_app();
    for method in ["POST", "DELETE", "PUT"] {
        let (status, _) = send(&test.app, request(method, "/endpoints")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

#[tokio::test]
async fn test_unsupported_methods_on_empty_identifier() {
    let test = build_app();
    for method in ["DELETE", "PUT"] {
        let (status, _) = send(&test.app, request(method, "/endpoints/")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}
