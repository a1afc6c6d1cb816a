//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::RegistryError;
use axum::{response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, warn};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub RegistryError);

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // 詳細（ストアのアドレス、ハッシュの中身）はログにのみ残す
        if self.0.is_internal() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }

        let payload = json!({
            "error": self.0.external_message()
        });

        (self.0.status_code(), Json(payload)).into_response()
    }
}
