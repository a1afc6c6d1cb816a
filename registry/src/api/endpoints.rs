//! エンドポイント管理API
//!
//! `/endpoints/{id}`の取得・登録と`/endpoints`の一覧

use super::error::AppError;
use crate::common::error::RegistryError;
use crate::registry::endpoints::UpsertStatus;
use crate::types::endpoint::{Endpoint, EndpointPayload};
use crate::types::identifier::extract_identifier;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    Json,
};

/// GET /endpoints/{id} - エンドポイント詳細取得
pub async fn get_endpoint(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<EndpointPayload>, AppError> {
    let identifier = extract_identifier(uri.path())?;
    let endpoint = state.endpoint_registry.get(identifier).await?;
    Ok(Json(endpoint))
}

/// POST /endpoints/{id} - エンドポイント登録
///
/// 新規なら201、既存の置き換えなら204（いずれもボディなし）。
pub async fn post_endpoint(
    State(state): State<AppState>,
    uri: Uri,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let identifier = extract_identifier(uri.path())?;
    let endpoint = Endpoint::from_json(&body)
        .map_err(|e| RegistryError::MalformedRequestBody(e.to_string()))?;

    let status = match state.endpoint_registry.upsert(identifier, &endpoint).await? {
        UpsertStatus::Created => StatusCode::CREATED,
        UpsertStatus::Updated => StatusCode::NO_CONTENT,
    };
    Ok(status)
}

/// GET /endpoints - エンドポイント一覧取得
pub async fn list_endpoints(
    State(state): State<AppState>,
) -> Result<Json<Vec<EndpointPayload>>, AppError> {
    let endpoints = state.endpoint_registry.list().await?;
    Ok(Json(endpoints))
}
