//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = ".catchrc";
const LOG_FILE_NAME: &str = "catch.jsonl";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

fn home_dir() -> Result<PathBuf, Error> {
    non_empty_var("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| Error::env("HOME is not set"))
}

impl EnvResolver for StdEnvResolver {
    fn resolve_config_path(&self) -> Result<PathBuf, Error> {
        if let Some(path) = non_empty_var("CATCH_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        Ok(home_dir()?.join(CONFIG_FILE_NAME))
    }

    fn resolve_log_path(&self) -> Result<PathBuf, Error> {
        if let Some(path) = non_empty_var("CATCH_LOG_FILE") {
            return Ok(PathBuf::from(path));
        }
        let state_base = match non_empty_var("XDG_STATE_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => home_dir()?.join(".local/state"),
        };
        Ok(state_base.join("catch").join(LOG_FILE_NAME))
    }
}
