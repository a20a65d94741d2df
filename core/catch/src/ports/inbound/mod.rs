//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::CatchCommand;
use common::error::Error;
use std::io::Write;

/// 検証済みの CatchCommand を 1 つ実行して終了コードを返す
///
/// main はこの trait を実装した Runner の run を呼び出す。出力先は呼び出し側が渡す。
pub trait UseCaseRunner {
    fn run(&self, cmd: CatchCommand, out: &mut dyn Write) -> Result<i32, Error>;
}
