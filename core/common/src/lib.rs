//! catch 共通ライブラリ
//!
//! `catch` コマンドが使うエラー型・ドメイン型・設定読み込み・ポートとアダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// 設定ファイル（~/.catchrc）の読み込み
pub mod config;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
