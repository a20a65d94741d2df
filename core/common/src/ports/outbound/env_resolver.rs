//! 環境変数解決 Outbound ポート
//!
//! 設定ファイル・ログファイルの場所を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 設定ファイルのパス
    ///
    /// 優先順位:
    /// 1. CATCH_CONFIG（設定されていれば）
    /// 2. $HOME/.catchrc
    fn resolve_config_path(&self) -> Result<PathBuf, Error>;

    /// JSONL ログファイルのパス
    ///
    /// 優先順位:
    /// 1. CATCH_LOG_FILE
    /// 2. $XDG_STATE_HOME/catch/catch.jsonl
    /// 3. $HOME/.local/state/catch/catch.jsonl
    fn resolve_log_path(&self) -> Result<PathBuf, Error>;
}
