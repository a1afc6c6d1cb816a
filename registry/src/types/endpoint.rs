//! エンドポイント型定義
//!
//! カナリア（死活監視対象）エンドポイントの定義

use crate::common::error::CommonError;
use crate::types::frequency::Frequency;
use crate::types::identifier::is_valid_identifier;
use serde::{Deserialize, Serialize};
use url::Url;

/// エンドポイント
///
/// 検証済みのエンドポイント定義。書き込み（POST）の入力として使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// 一意識別子（ストアのキー接尾辞）
    pub identifier: String,
    /// 監視対象URL（絶対URL、受け取った文字列のまま保持）
    pub url: String,
    /// HTTPメソッド（例: "GET", "HEAD"）
    pub method: String,
    /// 正常とみなすHTTPステータスコード
    pub status_online: u16,
    /// ポーリング間隔
    pub frequency: Frequency,
    /// ダウン判定までの連続失敗回数
    pub fail_after: u8,
}

impl Endpoint {
    /// JSONボディからエンドポイントをデコードし、検証する
    pub fn from_json(body: &[u8]) -> Result<Self, CommonError> {
        let endpoint: Endpoint = serde_json::from_slice(body)?;
        endpoint.validate()?;
        Ok(endpoint)
    }

    /// 保存前の不変条件を検証する
    ///
    /// ストアに空フィールドを書くと読み出し時に破損扱いになるため、
    /// ここで弾いておく。
    pub fn validate(&self) -> Result<(), CommonError> {
        if !is_valid_identifier(&self.identifier) {
            return Err(CommonError::Validation(format!(
                "identifier {:?} is not a valid endpoint identifier",
                self.identifier
            )));
        }
        let url = Url::parse(&self.url)
            .map_err(|e| CommonError::Validation(format!("invalid url {:?}: {e}", self.url)))?;
        if url.cannot_be_a_base() {
            return Err(CommonError::Validation(format!(
                "url {:?} is not a hierarchical URL",
                self.url
            )));
        }
        if self.method.trim().is_empty() {
            return Err(CommonError::Validation("method must not be empty".into()));
        }
        if self.frequency.is_zero() {
            return Err(CommonError::Validation("frequency must be positive".into()));
        }
        Ok(())
    }
}

/// エンドポイントのフラット表現
///
/// JSONレスポンスおよびストアから読み出した値。`url`と`frequency`は
/// 保存されている文字列表現のまま保持し、再パースしない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointPayload {
    /// 一意識別子
    pub identifier: String,
    /// 監視対象URL
    pub url: String,
    /// HTTPメソッド
    pub method: String,
    /// 正常とみなすHTTPステータスコード
    pub status_online: u16,
    /// ポーリング間隔（duration文字列）
    pub frequency: String,
    /// ダウン判定までの連続失敗回数
    pub fail_after: u8,
}

impl From<&Endpoint> for EndpointPayload {
    fn from(endpoint: &Endpoint) -> Self {
        Self {
            identifier: endpoint.identifier.clone(),
            url: endpoint.url.clone(),
            method: endpoint.method.clone(),
            status_online: endpoint.status_online,
            frequency: endpoint.frequency.to_string(),
            fail_after: endpoint.fail_after,
        }
    }
}

impl From<Endpoint> for EndpointPayload {
    fn from(endpoint: Endpoint) -> Self {
        Self::from(&endpoint)
    }
}
