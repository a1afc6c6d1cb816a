//! Valkeyストア
//!
//! `redis`クレートの`ConnectionManager`を共有し、全リクエストから同時に使う。
//! `ConnectionManager`はクローンしても同じ多重化接続を指す。

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::collections::HashMap;
use tracing::debug;

use super::traits::{EndpointStore, HashFields};
use crate::common::error::StoreError;
use crate::config::StoreConfig;

/// Valkeyストア
#[derive(Clone)]
pub struct ValkeyStore {
    connection: ConnectionManager,
}

impl ValkeyStore {
    /// Valkeyに接続する
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = redis::Client::open(config.connection_url())?;
        let connection = ConnectionManager::new(client).await?;
        debug!(
            address = %config.address,
            database = config.database,
            "Connected to Valkey"
        );
        Ok(Self { connection })
    }
}

#[async_trait]
impl EndpointStore for ValkeyStore {
    async fn set_hash(&self, key: &str, fields: &HashFields) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        // 古いフィールドを残さないよう、削除と書き込みをMULTI/EXECでまとめる
        let _: () = redis::pipe()
            .atomic()
            .del(key)
            .ignore()
            .hset_multiple(key, fields.as_slice())
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn get_hash(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let mut conn = self.connection.clone();
        let hash: HashMap<String, String> = conn.hgetall(key).await?;
        Ok(hash)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection.clone();
        let keys: Vec<String> = conn.keys(pattern).await?;
        Ok(keys)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }
}
