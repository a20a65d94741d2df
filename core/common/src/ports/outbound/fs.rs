//! ファイルシステム Outbound ポート
//!
//! 設定の読み込みとログ追記はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のメモリ FS など。
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
    fn is_file(&self, path: &Path) -> bool;

    /// パスがファイルとして存在するか
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path)
    }
}
