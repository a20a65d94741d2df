//! catch ストリーム API のクライアント
//!
//! 1 操作 = 1 往復（update / delete は ID 解決の検索を含めて 2 往復）。リトライはしない。

use std::sync::Arc;

use common::config::Settings;
use common::domain::{MemoId, StreamName};
use common::error::Error;
use common::ports::outbound::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, Log, LogLevel, LogRecord, Url,
};
use serde_json::{json, Value};

use crate::domain::{Memo, SearchQuery, ServerModifiedAt};

/// メモ操作のユースケース（HttpTransport 経由で I/O を行う）
pub struct NoteClient {
    transport: Arc<dyn HttpTransport>,
    log: Arc<dyn Log>,
    base_url: Url,
    stream: StreamName,
}

impl NoteClient {
    /// 設定から認証情報入りのベース URL を組み立てる
    pub fn new(
        settings: &Settings,
        transport: Arc<dyn HttpTransport>,
        log: Arc<dyn Log>,
    ) -> Result<Self, Error> {
        let mut base_url = Url::parse(&settings.api_base).map_err(|e| {
            Error::config(format!("invalid api_base '{}': {}", &*settings.api_base, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "invalid api_base '{}': not a hierarchical URL",
                &*settings.api_base
            )));
        }
        let credentials = &settings.credentials;
        if base_url.set_username(credentials.username()).is_err()
            || base_url.set_password(Some(credentials.password())).is_err()
        {
            return Err(Error::config(format!(
                "api_base '{}' cannot carry credentials",
                &*settings.api_base
            )));
        }
        Ok(Self {
            transport,
            log,
            base_url,
            stream: StreamName::default(),
        })
    }

    /// メモを作成し、HTTP ステータスをそのまま返す
    pub fn create(&self, text: &str) -> Result<u16, Error> {
        let url = self.endpoint(&[&*self.stream])?;
        let request = HttpRequest::new(HttpMethod::Post, url).with_json(json!({ "text": text }));
        let response = self.send(&request)?;
        Ok(response.status)
    }

    /// ストリームを検索し、result.objects をサーバの並び順のまま返す
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Memo>, Error> {
        let mut url = self.endpoint(&[&*self.stream])?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        let response = self.send(&HttpRequest::new(HttpMethod::Get, url))?;
        if !response.is_success() {
            return Err(Error::http(format!(
                "search failed with HTTP {}: {}",
                response.status, response.body
            )));
        }
        parse_objects(&response.body)
    }

    /// ID からメモを解決する（limit に ID を入れた検索結果の最後の要素）
    pub fn resolve(&self, id: &MemoId) -> Result<Memo, Error> {
        self.search(&SearchQuery::by_id(id))?
            .pop()
            .ok_or_else(|| Error::json(format!("no memo returned for id {}", id)))
    }

    /// 解決済みのメモの本文を置き換える
    pub fn update_memo(&self, memo: &Memo, text: &str) -> Result<u16, Error> {
        let modified_at = require_write_target(memo)?;
        let url = self.endpoint(&["sync", memo.id.as_str()])?;
        let request = HttpRequest::new(HttpMethod::Put, url).with_json(json!({
            "text": text,
            "server_modified_at": modified_at.as_json(),
        }));
        Ok(self.send(&request)?.status)
    }

    /// 解決済みのメモを削除する
    pub fn delete_memo(&self, memo: &Memo) -> Result<u16, Error> {
        let modified_at = require_write_target(memo)?;
        let mut url = self.endpoint(&[&*self.stream, memo.id.as_str()])?;
        url.query_pairs_mut()
            .append_pair("server_modified_at", &modified_at.as_query_value());
        Ok(self.send(&HttpRequest::new(HttpMethod::Delete, url))?.status)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config("api_base is not a hierarchical URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let result = self.transport.send(request);
        self.log_exchange(request, &result);
        let response = result?;
        if !response.is_success() {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Warn, "non-success response")
                    .layer("usecase")
                    .kind("http")
                    .field("method", request.method.as_str())
                    .field("status", response.status),
            );
        }
        Ok(response)
    }

    /// リクエスト・レスポンス・結果を debug で記録する（-v で stderr に出る）
    fn log_exchange(&self, request: &HttpRequest, result: &Result<HttpResponse, Error>) {
        let mut record = LogRecord::new(LogLevel::Debug, "http exchange")
            .layer("usecase")
            .kind("http")
            .field(
                "request",
                format!("{} {}", request.method, request.redacted_url()),
            );
        if let Some(ref body) = request.body {
            record = record.field("body", body.clone());
        }
        record = match result {
            Ok(response) => record
                .field("response", response.body.clone())
                .field("result", response.status),
            Err(e) => record.field("result", e.to_string()),
        };
        let _ = self.log.log(&record);
    }
}

fn require_write_target(memo: &Memo) -> Result<&ServerModifiedAt, Error> {
    if memo.id.is_empty() {
        return Err(Error::json("resolved memo has no id"));
    }
    memo.server_modified_at
        .as_ref()
        .ok_or_else(|| Error::json(format!("memo {} has no server_modified_at", memo.id)))
}

/// 検索レスポンスの result.objects を取り出す
pub fn parse_objects(body: &str) -> Result<Vec<Memo>, Error> {
    let mut v: Value = serde_json::from_str(body)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
    let objects = v
        .get_mut("result")
        .and_then(|r| r.get_mut("objects"))
        .map(Value::take)
        .ok_or_else(|| Error::json("response has no result.objects"))?;
    serde_json::from_value(objects)
        .map_err(|e| Error::json(format!("Failed to parse result.objects: {}", e)))
}
