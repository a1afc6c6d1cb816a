//! ロギング初期化
//!
//! `MEOW_LOG_LEVEL`（未設定なら`RUST_LOG`）でフィルタを指定し、stderrへ出力する。

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// フィルタ未指定時のログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// ログフィルタを組み立てる（不正な指定はデフォルトに戻す）
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("Invalid log filter {directive:?} ({err}), falling back to {DEFAULT_LOG_LEVEL}");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}

/// 環境変数からフィルタ指定を読む（`MEOW_LOG_LEVEL` > `RUST_LOG` > デフォルト）
pub fn directive_from_env() -> String {
    std::env::var("MEOW_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

/// グローバルなtracing subscriberを初期化する
pub fn init() -> Result<(), TryInitError> {
    let directive = directive_from_env();

    tracing_subscriber::registry()
        .with(build_filter(&directive))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
}
