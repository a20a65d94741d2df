//! バイナリ crate のテスト（HTTP は RecordingTransport で置き換える）


use std::sync::{Arc, Mutex};

use common::config::Settings;
use common::domain::{ApiBase, Credentials};
use common::error::Error;
use common::ports::outbound::{Log, LogRecord};

use crate::adapter::recording_http::RecordingTransport;
use crate::usecase::NoteClient;
use crate::wiring::App;

/// テスト用: 記録したレコードを後から確認できる Log
#[derive(Default)]
pub(crate) struct CapturingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl CapturingLog {
    pub(crate) fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Log for CapturingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub(crate) fn test_settings() -> Settings {
    Settings {
        credentials: Credentials::new("namae", "oshienai"),
        api_base: ApiBase::default(),
    }
}

pub(crate) fn client_with(transport: &Arc<RecordingTransport>, log: Arc<dyn Log>) -> NoteClient {
    NoteClient::new(&test_settings(), transport.clone(), log).unwrap()
}

pub(crate) fn app_with(transport: &Arc<RecordingTransport>, log: Arc<dyn Log>) -> App {
    App {
        note_client: client_with(transport, Arc::clone(&log)),
        logger: log,
    }
}
