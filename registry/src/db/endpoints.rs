//! エンドポイントのストア表現
//!
//! 1エンドポイント = 1ハッシュ（キー: `endpoints:<identifier>`）。
//! 全フィールドを文字列で保存する。

use std::collections::HashMap;
use std::num::ParseIntError;
use thiserror::Error;

use super::traits::HashFields;
use crate::types::endpoint::{Endpoint, EndpointPayload};

/// エンドポイントキーの接頭辞
pub const KEY_PREFIX: &str = "endpoints:";

/// 全エンドポイントを列挙するキーパターン
pub const KEY_PATTERN: &str = "endpoints:*";

const FIELD_IDENTIFIER: &str = "identifier";
const FIELD_URL: &str = "url";
const FIELD_METHOD: &str = "method";
const FIELD_STATUS_ONLINE: &str = "status_online";
const FIELD_FREQUENCY: &str = "frequency";
const FIELD_FAIL_AFTER: &str = "fail_after";

/// ストアのハッシュをデコードできなかった理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashDecodeError {
    /// フィールドが存在しない、または空
    #[error("missing field {0}")]
    MissingField(&'static str),
    /// 数値フィールドが読めない、または範囲外
    #[error("{field} is not a valid number: {value:?} ({source})")]
    InvalidNumber {
        /// フィールド名
        field: &'static str,
        /// 保存されていた値
        value: String,
        /// パースエラー
        #[source]
        source: ParseIntError,
    },
}

/// 識別子からストアキーを作る
pub fn endpoint_key(identifier: &str) -> String {
    format!("{}{}", KEY_PREFIX, identifier)
}

/// エンドポイントをハッシュのフィールド一覧に変換する
pub fn to_hash(endpoint: &Endpoint) -> HashFields {
    let payload = EndpointPayload::from(endpoint);
    vec![
        (FIELD_IDENTIFIER, payload.identifier),
        (FIELD_URL, payload.url),
        (FIELD_METHOD, payload.method),
        (FIELD_STATUS_ONLINE, payload.status_online.to_string()),
        (FIELD_FREQUENCY, payload.frequency),
        (FIELD_FAIL_AFTER, payload.fail_after.to_string()),
    ]
}

fn required<'a>(
    hash: &'a HashMap<String, String>,
    field: &'static str,
) -> Result<&'a str, HashDecodeError> {
    hash.get(field)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(HashDecodeError::MissingField(field))
}

fn number<T>(hash: &HashMap<String, String>, field: &'static str) -> Result<T, HashDecodeError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let raw = required(hash, field)?;
    raw.parse().map_err(|source| HashDecodeError::InvalidNumber {
        field,
        value: raw.to_string(),
        source,
    })
}

/// ハッシュからエンドポイントを復元する
///
/// 6フィールドすべてが存在し空でないこと、数値フィールドがビット幅に
/// 収まることを要求する。既定値での補完はしない。
pub fn from_hash(hash: &HashMap<String, String>) -> Result<EndpointPayload, HashDecodeError> {
    Ok(EndpointPayload {
        identifier: required(hash, FIELD_IDENTIFIER)?.to_string(),
        url: required(hash, FIELD_URL)?.to_string(),
        method: required(hash, FIELD_METHOD)?.to_string(),
        status_online: number(hash, FIELD_STATUS_ONLINE)?,
        frequency: required(hash, FIELD_FREQUENCY)?.to_string(),
        fail_after: number(hash, FIELD_FAIL_AFTER)?,
    })
}
