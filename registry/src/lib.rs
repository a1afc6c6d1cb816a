//! meow Endpoint Registry Server
//!
//! カナリアエンドポイント定義をValkeyに保存し、HTTPで公開する登録サーバー

#![warn(missing_docs)]

/// 共通型定義（エラー型）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// エンドポイント登録管理
pub mod registry;

/// ストアアクセス（Valkey / インメモリ）
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー、ストア接続文字列）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動・シャットダウン
pub mod server;

/// 型定義
pub mod types;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// エンドポイントレジストリ
    pub endpoint_registry: registry::endpoints::EndpointRegistry,
}
