//! エンドポイント識別子の検証
//!
//! 識別子は小文字英字で始まり、続けて1文字以上の小文字英字・数字・ハイフンからなる。

use crate::common::error::{RegistryError, RegistryResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// 識別子の正規表現（パス抽出と単体検証で共有）
pub const IDENTIFIER_PATTERN: &str = "[a-z][-a-z0-9]+";

/// 識別子を付与するリソースパスの接頭辞
pub const ENDPOINTS_PATH_PREFIX: &str = "/endpoints/";

static ENDPOINT_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{}({})$", ENDPOINTS_PATH_PREFIX, IDENTIFIER_PATTERN))
        .expect("endpoint path pattern must compile")
});

static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{}$", IDENTIFIER_PATTERN)).expect("identifier pattern must compile")
});

/// `/endpoints/{identifier}`形式のパスから識別子を取り出す
///
/// パス全体が形式に合わない場合、または末尾セグメントが識別子の文法に
/// 合わない場合は`InvalidIdentifier`を返す。
pub fn extract_identifier(path: &str) -> RegistryResult<&str> {
    ENDPOINT_PATH_REGEX
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| RegistryError::InvalidIdentifier(path.to_string()))
}

/// 文字列が識別子の文法を満たすか判定する
pub fn is_valid_identifier(candidate: &str) -> bool {
    IDENTIFIER_REGEX.is_match(candidate)
}
