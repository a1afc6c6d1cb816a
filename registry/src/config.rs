//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to alternative variable names, and the Valkey connection settings.

use crate::common::error::CommonError;

/// Default Valkey port when the connection string omits one
pub const DEFAULT_VALKEY_PORT: u16 = 6379;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use meow_registry::config::get_env_with_fallback;
///
/// let url = get_env_with_fallback("VALKEY_URL", "REDIS_URL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Valkey接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `host:port`
    pub address: String,
    /// 論理データベース番号
    pub database: i64,
}

impl StoreConfig {
    /// `VALKEY_URL`（旧: `REDIS_URL`）から読み込む
    pub fn from_env() -> Result<Self, CommonError> {
        let raw = get_env_with_fallback("VALKEY_URL", "REDIS_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                CommonError::Config(
                    "environment variable VALKEY_URL must be set (example: valkey.example.com:6379/4)"
                        .to_string(),
                )
            })?;
        Self::parse(&raw)
    }

    /// 接続文字列をパースする
    ///
    /// `host`, `host:port`, `host:port/db`を受け付け、`redis://`または
    /// `valkey://`の接頭辞は取り除く。ポート省略時は6379、DB省略時は0。
    pub fn parse(raw: &str) -> Result<Self, CommonError> {
        let trimmed = raw.trim();
        let without_scheme = trimmed
            .strip_prefix("redis://")
            .or_else(|| trimmed.strip_prefix("valkey://"))
            .unwrap_or(trimmed);

        let (host_part, database) = match without_scheme.rsplit_once('/') {
            Some((host, "")) => (host, 0),
            Some((host, db)) => {
                let database = db.parse::<i64>().map_err(|e| {
                    CommonError::Config(format!("invalid DB number {db:?} in VALKEY_URL: {e}"))
                })?;
                if database < 0 {
                    return Err(CommonError::Config(format!(
                        "DB number in VALKEY_URL must not be negative: {database}"
                    )));
                }
                (host, database)
            }
            None => (without_scheme, 0),
        };

        if host_part.is_empty() {
            return Err(CommonError::Config(format!(
                "VALKEY_URL {raw:?} does not contain a host"
            )));
        }

        let address = if has_port(host_part) {
            host_part.to_string()
        } else {
            format!("{}:{}", host_part, DEFAULT_VALKEY_PORT)
        };

        Ok(Self { address, database })
    }

    /// `redis`クレートに渡す接続URL
    pub fn connection_url(&self) -> String {
        format!("redis://{}/{}", self.address, self.database)
    }
}

fn has_port(address: &str) -> bool {
    if address.starts_with('[') {
        return address
            .rsplit_once("]:")
            .is_some_and(|(_, port)| port.parse::<u16>().is_ok());
    }
    match address.rsplit_once(':') {
        Some((host, port)) => !host.contains(':') && port.parse::<u16>().is_ok(),
        None => false,
    }
}
