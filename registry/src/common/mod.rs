//! 共通型定義
//!
//! レジストリ全体で共有するエラー型

/// エラー型定義
pub mod error;
