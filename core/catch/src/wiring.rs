//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{
    FileJsonLog, ReqwestTransport, StdEnvResolver, StdFileSystem, StderrLog, TeeLog,
};
use common::config::load_settings;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, HttpTransport, Log, LogLevel, LogRecord};

use crate::cli::Config;
use crate::usecase::NoteClient;

/// 配線済みのアプリ（Runner が保持する）
pub struct App {
    pub note_client: NoteClient,
    pub logger: Arc<dyn Log>,
}

/// ログの出力先を組み立てる。ファイルには Info 以上（-v 指定時は Debug も）を残し、
/// -v 指定時は stderr にも出す。
fn wire_logger(fs: Arc<dyn FileSystem>, env_resolver: &dyn EnvResolver, verbose: bool) -> Arc<dyn Log> {
    let max_level = if verbose { LogLevel::Debug } else { LogLevel::Info };
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if let Ok(path) = env_resolver.resolve_log_path() {
        logs.push(Arc::new(LevelFilter {
            inner: FileJsonLog::new(fs, path),
            max_level,
        }));
    }
    if verbose {
        logs.push(Arc::new(StderrLog::new(LogLevel::Debug)));
    }
    Arc::new(TeeLog::new(logs))
}

/// 指定レベルより冗長なレコードを捨てる
struct LevelFilter<L: Log> {
    inner: L,
    max_level: LogLevel,
}

impl<L: Log> Log for LevelFilter<L> {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level <= self.max_level {
            self.inner.log(record)
        } else {
            Ok(())
        }
    }
}

/// 配線: 設定ファイルを読み、reqwest トランスポートで NoteClient を組み立てる
pub fn wire_catch(config: &Config) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver = StdEnvResolver;
    let logger = wire_logger(Arc::clone(&fs), &env_resolver, config.verbose);

    let config_path = match config.config_path {
        Some(ref path) => path.clone(),
        None => env_resolver.resolve_config_path()?,
    };
    let settings = load_settings(fs.as_ref(), &config_path)?;
    let _ = logger.log(
        &LogRecord::new(LogLevel::Debug, "config loaded")
            .layer("wiring")
            .kind("config")
            .field("path", config_path.display().to_string())
            .field("api_base", &*settings.api_base),
    );

    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new()?);
    let note_client = NoteClient::new(&settings, transport, Arc::clone(&logger))?;
    Ok(App {
        note_client,
        logger,
    })
}
