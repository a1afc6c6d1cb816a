//! 型定義

/// エンドポイント型定義
pub mod endpoint;

/// ポーリング間隔（Go形式のduration文字列）
pub mod frequency;

/// エンドポイント識別子の検証
pub mod identifier;
