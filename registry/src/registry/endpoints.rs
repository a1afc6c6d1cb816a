//! エンドポイントレジストリ
//!
//! エンドポイント定義の読み出し・登録・一覧をストア上で行う。
//! プロセス内に状態は持たず、すべてストアに委ねる。

use crate::common::error::{RegistryError, RegistryResult};
use crate::db::endpoints::{self as codec, KEY_PATTERN};
use crate::db::traits::EndpointStore;
use crate::types::endpoint::{Endpoint, EndpointPayload};
use std::sync::Arc;
use tracing::{debug, info};

/// 登録ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertStatus {
    /// 新規登録
    Created,
    /// 既存エンドポイント更新
    Updated,
}

/// エンドポイントレジストリ
///
/// ストアのハンドルは共有され、リクエスト間で変更されない。
#[derive(Clone)]
pub struct EndpointRegistry {
    store: Arc<dyn EndpointStore>,
}

impl EndpointRegistry {
    /// ストアからレジストリを作成
    pub fn new(store: Arc<dyn EndpointStore>) -> Self {
        Self { store }
    }

    /// ハッシュを読み出してデコードする（空ならNone）
    async fn load(&self, key: &str) -> RegistryResult<Option<EndpointPayload>> {
        let hash = self
            .store
            .get_hash(key)
            .await
            .map_err(|e| RegistryError::store("hgetall", key, e))?;
        if hash.is_empty() {
            return Ok(None);
        }

        codec::from_hash(&hash)
            .map(Some)
            .map_err(|e| RegistryError::MalformedStoredRecord {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    /// エンドポイントを取得
    pub async fn get(&self, identifier: &str) -> RegistryResult<EndpointPayload> {
        let key = codec::endpoint_key(identifier);
        self.load(&key)
            .await?
            .ok_or_else(|| RegistryError::NotFound(identifier.to_string()))
    }

    /// エンドポイントを登録（存在すれば全フィールドを置き換え）
    ///
    /// パスの識別子とボディの識別子が一致しない場合、ストアに触れずに
    /// `IdentityMismatch`を返す。
    pub async fn upsert(
        &self,
        identifier: &str,
        endpoint: &Endpoint,
    ) -> RegistryResult<UpsertStatus> {
        if identifier != endpoint.identifier {
            return Err(RegistryError::IdentityMismatch {
                path: identifier.to_string(),
                body: endpoint.identifier.clone(),
            });
        }

        let key = codec::endpoint_key(identifier);
        let fields = codec::to_hash(endpoint);
        let existed = self
            .store
            .replace_hash(&key, &fields)
            .await
            .map_err(|e| RegistryError::store("hset", key.as_str(), e))?;

        let status = if existed {
            UpsertStatus::Updated
        } else {
            UpsertStatus::Created
        };
        info!(identifier = %identifier, status = ?status, "Endpoint stored");
        Ok(status)
    }

    /// すべてのエンドポイントを取得
    ///
    /// 列挙後に消えたキーは読み飛ばす。デコードできないハッシュが1つでも
    /// あれば一覧全体を失敗させ、部分的な結果は返さない。
    pub async fn list(&self) -> RegistryResult<Vec<EndpointPayload>> {
        let keys = self
            .store
            .keys(KEY_PATTERN)
            .await
            .map_err(|e| RegistryError::store("keys", KEY_PATTERN, e))?;

        let mut endpoints = Vec::with_capacity(keys.len());
        for key in keys {
            match self.load(&key).await? {
                Some(endpoint) => endpoints.push(endpoint),
                None => debug!(key = %key, "Endpoint vanished during listing"),
            }
        }
        Ok(endpoints)
    }
}
