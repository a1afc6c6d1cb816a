//! ストアアクセス層
//!
//! Valkey（Redis互換）へのエンドポイント定義の永続化

/// Store trait定義
pub mod traits;

/// エンドポイントのハッシュ表現
pub mod endpoints;

/// Valkeyクライアント
pub mod valkey;

/// インメモリストア（テスト用）
pub mod memory;

use crate::common::error::StoreError;
use traits::EndpointStore;

/// 接続確認に使うキー
pub const PROBE_KEY: &str = "purpose";

/// 接続確認に書き込む値
pub const PROBE_VALUE: &str = "meow";

/// ストアへの書き込みと読み出しができるか確認する
pub async fn check_connectivity(store: &dyn EndpointStore) -> Result<(), StoreError> {
    store.set(PROBE_KEY, PROBE_VALUE).await?;
    match store.get(PROBE_KEY).await? {
        Some(value) if value == PROBE_VALUE => Ok(()),
        other => Err(StoreError::Unavailable(format!(
            "probe key {PROBE_KEY} read back {other:?}, expected {PROBE_VALUE:?}"
        ))),
    }
}
