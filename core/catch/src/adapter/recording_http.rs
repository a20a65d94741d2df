//! テスト用: 送られたリクエストを記録し、用意したレスポンスを順に返す HttpTransport 実装

#[cfg(test)]
mod recording {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use common::error::Error;
    use common::ports::outbound::{HttpRequest, HttpResponse, HttpTransport};
    use serde_json::Value;

    /// テスト用: 記録付きのスタブ
    #[derive(Default)]
    pub struct RecordingTransport {
        responses: Mutex<VecDeque<HttpResponse>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// 次に返すレスポンスを積む
        pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(HttpResponse::new(status, body));
            self
        }

        /// 次に返すレスポンスとして検索結果（result.objects）を積む
        pub fn respond_objects(self, objects: Value) -> Self {
            let body = serde_json::json!({ "status": "ok", "result": { "objects": objects } });
            self.respond(200, body.to_string())
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpTransport for RecordingTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| Error::http("connection refused (no stub response queued)"))
        }
    }
}

#[cfg(test)]
pub use recording::RecordingTransport;
