//! リクエストログミドルウェア
//!
//! ディスパッチ前にメソッド・パス・接続元アドレスを記録する。

use axum::{
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::{info, warn};

/// 接続元アドレス（取得できない場合は"unknown"）
fn remote_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// リクエストを記録してから次のハンドラーへ渡す
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let remote_addr = remote_addr(&request);

    info!(method = %method, path = %path, remote_addr = %remote_addr, "Request received");

    let response = next.run(request).await;
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        warn!(method = %method, path = %path, "Method not allowed");
    }
    response
}
