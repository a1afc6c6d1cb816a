//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `RegistryError`は`status_code()`と`external_message()`を提供し、
//! HTTPレイヤーは内部情報（ストアのアドレス、ハッシュの中身等）を
//! レスポンスに含めずにエラーを返せる。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Key-value store error type
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error reported by the Valkey client
    #[error("Valkey error: {0}")]
    Valkey(#[from] redis::RedisError),

    /// Store could not be reached or refused the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// endpoint registry error type
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Path segment does not satisfy the identifier grammar
    #[error("Invalid endpoint identifier: {0}")]
    InvalidIdentifier(String),

    /// Request body absent, not JSON, or missing/mistyped fields
    #[error("Malformed request body: {0}")]
    MalformedRequestBody(String),

    /// Path identifier and body identifier differ
    #[error("Identifier mismatch (resource: {path}, body: {body})")]
    IdentityMismatch {
        /// Identifier taken from the request path
        path: String,
        /// Identifier taken from the request body
        body: String,
    },

    /// No record under the given identifier
    #[error("Endpoint not found: {0}")]
    NotFound(String),

    /// Stored hash is missing a field or holds an unparseable value
    #[error("Malformed stored record at {key}: {reason}")]
    MalformedStoredRecord {
        /// Store key of the broken hash
        key: String,
        /// Decoding failure
        reason: String,
    },

    /// Store round-trip failed
    #[error("Store error during {operation} on {key}: {source}")]
    Store {
        /// Store operation (e.g. "hgetall")
        operation: &'static str,
        /// Key or pattern the operation targeted
        key: String,
        /// Underlying store error
        #[source]
        source: StoreError,
    },
}

impl RegistryError {
    /// ストア操作の失敗をコンテキスト付きでラップする
    pub fn store(operation: &'static str, key: impl Into<String>, source: StoreError) -> Self {
        Self::Store {
            operation,
            key: key.into(),
            source,
        }
    }

    /// Returns a safe error message for external clients.
    ///
    /// Internal variants collapse to a generic message. Full details
    /// (`to_string()`) belong in server logs only.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "Invalid endpoint identifier",
            Self::MalformedRequestBody(_) => "Malformed request body",
            Self::IdentityMismatch { .. } => "Identifier in path and body differ",
            Self::NotFound(_) => "Endpoint not found",
            Self::MalformedStoredRecord { .. } => "Internal server error",
            Self::Store { .. } => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::MalformedRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::IdentityMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedStoredRecord { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// サーバー側の不具合（クライアントの責任ではない）かどうか
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

/// レジストリ操作の結果型
pub type RegistryResult<T> = Result<T, RegistryError>;
