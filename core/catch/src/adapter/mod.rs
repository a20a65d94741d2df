//! catch 固有のアダプタ（テスト用の HttpTransport など）

pub mod recording_http;
