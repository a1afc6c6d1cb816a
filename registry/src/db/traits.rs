//! Store traitパターン定義
//!
//! キーバリューストア操作を抽象化し、テスタビリティを向上させるためのtrait。
//! レジストリは具体的なクライアントではなく`Arc<dyn EndpointStore>`を受け取る。

use async_trait::async_trait;
use std::collections::HashMap;

use crate::common::error::StoreError;

/// ハッシュのフィールド一覧（フィールド名, 値）
pub type HashFields = Vec<(&'static str, String)>;

/// エンドポイント定義を保存するキーバリューストア
#[async_trait]
pub trait EndpointStore: Send + Sync {
    /// ハッシュ全体を置き換えて保存する
    async fn set_hash(&self, key: &str, fields: &HashFields) -> Result<(), StoreError>;

    /// ハッシュの全フィールドを取得する（存在しない場合は空）
    async fn get_hash(&self, key: &str) -> Result<HashMap<String, String>, StoreError>;

    /// パターンに一致するキー一覧を取得する
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError>;

    /// 単一キーに値を保存する（接続確認用）
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// 単一キーの値を取得する（接続確認用）
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// ハッシュを置き換え、置き換え前にキーが存在したかを返す
    ///
    /// デフォルト実装は存在確認と書き込みを別々に行うため、同一キーへの
    /// 同時書き込みでは両方が「存在しなかった」と報告し得る。
    async fn replace_hash(&self, key: &str, fields: &HashFields) -> Result<bool, StoreError> {
        let existed = !self.get_hash(key).await?.is_empty();
        self.set_hash(key, fields).await?;
        Ok(existed)
    }
}
