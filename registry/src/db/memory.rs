//! インメモリストア
//!
//! Valkeyを起動せずにレジストリとAPIを動かすためのテスト用実装

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::traits::{EndpointStore, HashFields};
use crate::common::error::StoreError;

/// インメモリストア
#[derive(Clone, Default)]
pub struct MemoryStore {
    hashes: Arc<RwLock<HashMap<String, HashMap<String, String>>>>,
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 生のハッシュを直接書き込む（破損データの注入用）
    pub async fn insert_raw_hash(&self, key: &str, fields: &[(&str, &str)]) {
        let hash = fields
            .iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        self.hashes.write().await.insert(key.to_string(), hash);
    }

    /// 保存されているハッシュ数
    pub async fn hash_count(&self) -> usize {
        self.hashes.read().await.len()
    }
}

/// `*`を末尾にだけ許す簡易グロブ
fn matches_pattern(pattern: &str, key: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}

#[async_trait]
impl EndpointStore for MemoryStore {
    async fn set_hash(&self, key: &str, fields: &HashFields) -> Result<(), StoreError> {
        let hash = fields
            .iter()
            .map(|(field, value)| (field.to_string(), value.clone()))
            .collect();
        self.hashes.write().await.insert(key.to_string(), hash);
        Ok(())
    }

    async fn get_hash(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        Ok(self
            .hashes
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let hashes = self.hashes.read().await;
        let values = self.values.read().await;
        Ok(hashes
            .keys()
            .chain(values.keys())
            .filter(|key| matches_pattern(pattern, key))
            .cloned()
            .collect())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }
}
