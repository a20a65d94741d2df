//! 設定ファイル（~/.catchrc）の読み込み
//!
//! 1 行 1 代入の形式。キー先頭の `@` と値のクォートは省略可。
//!
//! ```text
//! @user = "namae"
//! @password = "oshienai"
//! # api_base = "http://localhost:8080/v3/streams"
//! ```

use crate::domain::{ApiBase, Credentials};
use crate::error::Error;
use crate::ports::outbound::FileSystem;
use regex::Regex;
use std::path::Path;

/// 起動時に一度だけ読み込む設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub credentials: Credentials,
    pub api_base: ApiBase,
}

/// 設定ファイルを読み込んで Settings を返す。ファイルが無い・読めない・値が欠けている場合はエラー。
pub fn load_settings(fs: &dyn FileSystem, path: &Path) -> Result<Settings, Error> {
    if !fs.exists(path) {
        return Err(Error::config(format!(
            "config file '{}' not found (write @user and @password into it)",
            path.display()
        )));
    }
    let content = fs
        .read_to_string(path)
        .map_err(|e| Error::config(format!("failed to read '{}': {}", path.display(), e)))?;
    parse_settings(&content)
        .map_err(|e| Error::config(format!("{}: {}", path.display(), config_detail(e))))
}

fn config_detail(e: Error) -> String {
    match e {
        Error::Config(msg) => msg,
        other => other.to_string(),
    }
}

/// 設定ファイルの内容を解析する
pub fn parse_settings(content: &str) -> Result<Settings, Error> {
    let assignment = Regex::new(r#"^@?([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*?)\s*$"#)
        .map_err(|e| Error::config(e.to_string()))?;

    let mut username: Option<String> = None;
    let mut password: Option<String> = None;
    let mut api_base: Option<String> = None;

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let caps = assignment.captures(line).ok_or_else(|| {
            Error::config(format!("line {}: expected `key = value`", lineno + 1))
        })?;
        let value = unquote(&caps[2]);
        match &caps[1] {
            "user" | "name" | "username" => username = Some(value),
            "password" => password = Some(value),
            "api_base" => api_base = Some(value),
            _ => {}
        }
    }

    let username = username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Error::config("user is not set"))?;
    let password = password.ok_or_else(|| Error::config("password is not set"))?;

    Ok(Settings {
        credentials: Credentials::new(username, password),
        api_base: api_base.map(ApiBase::new).unwrap_or_default(),
    })
}

fn unquote(raw: &str) -> String {
    for q in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(q) && raw.ends_with(q) {
            return raw[1..raw.len() - 1].to_string();
        }
    }
    raw.to_string()
}
