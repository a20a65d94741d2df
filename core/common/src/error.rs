//! エラーハンドリング
//!
//! 各バリアントがプロセスの終了コードに対応する（`exit_code()`）。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, ThisError)]
pub enum Error {
    /// 使い方の誤り（メッセージは stdout に出し、終了コード 1）
    #[error("{0}")]
    Usage(String),
    /// 引数不正
    #[error("{0}")]
    InvalidArgument(String),
    /// 設定ファイルの欠落・不正
    #[error("config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    /// HTTP 通信の失敗・非 2xx 応答
    #[error("HTTP error: {0}")]
    Http(String),
    /// 応答 JSON の解析失敗・期待するフィールドの欠落
    #[error("JSON error: {0}")]
    Json(String),
    #[error("environment error: {0}")]
    Env(String),
}

impl Error {
    pub fn usage(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// プロセス終了コード（sysexits.h に準拠。Usage のみ 1）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 1,
            Error::InvalidArgument(_) => 64,
            Error::Json(_) => 65,
            Error::Http(_) => 69,
            Error::Env(_) => 70,
            Error::Io(_) => 74,
            Error::Config(_) => 78,
        }
    }

    /// 使い方の案内を出すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::usage("No text given.");
        assert_eq!(err.to_string(), "No text given.");
        assert_eq!(err.exit_code(), 1);
        assert!(err.is_usage());

        let err = Error::invalid_argument("bad flag");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::config("missing password");
        assert_eq!(err.to_string(), "config error: missing password");
        assert_eq!(err.exit_code(), 78);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errs = [
            Error::io_msg("x"),
            Error::http("x"),
            Error::json("x"),
            Error::env("x"),
        ];
        for e in &errs {
            assert_ne!(e.exit_code(), 0);
            assert_ne!(e.exit_code(), 1, "exit 1 is reserved for usage errors");
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
