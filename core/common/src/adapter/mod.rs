//! アダプター（外界の I/O を ports::outbound の trait で抽象化した標準実装）
//!
//! usecase はポートの trait 経由でのみファイル・環境変数・HTTP に触れる。
//! 実装は標準実装（Std* / Reqwest*）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod reqwest_transport;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use reqwest_transport::ReqwestTransport;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use stderr_log::{format_human, StderrLog, TeeLog};
