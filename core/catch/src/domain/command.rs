//! catch コマンドの enum（Command Pattern）
//!
//! 1 回の起動で実行する操作は必ず 1 つ。main の Runner が網羅的に match する。

use crate::domain::SortOrder;
use common::domain::MemoId;

/// catch の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum CatchCommand {
    /// ヘルプ表示
    Help,
    /// メモの作成
    Create { text: String },
    /// 最近更新されたメモの一覧（操作フラグ未指定時もこれ）
    List { limit: u32, sort: SortOrder },
    /// メモ本文の更新
    Update { id: MemoId, text: String },
    /// メモの削除
    Delete { id: MemoId },
}

impl CatchCommand {
    /// ログ用の短い名前
    pub fn name(&self) -> &'static str {
        match self {
            CatchCommand::Help => "help",
            CatchCommand::Create { .. } => "create",
            CatchCommand::List { .. } => "list",
            CatchCommand::Update { .. } => "update",
            CatchCommand::Delete { .. } => "delete",
        }
    }
}
