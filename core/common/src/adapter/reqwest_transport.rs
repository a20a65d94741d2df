//! reqwest（blocking）による HttpTransport 実装
//!
//! URL の userinfo に埋め込まれた認証情報は reqwest が Basic 認証ヘッダに変換する。

use crate::error::Error;
use crate::ports::outbound::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// reqwest::blocking::Client で 1 リクエストずつ同期送信する
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("catch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.clone())
            .header("Accept", "application/json");

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e.without_url())))?;

        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(to_reqwest_method(HttpMethod::Post), reqwest::Method::POST);
        assert_eq!(to_reqwest_method(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(to_reqwest_method(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_new_builds_client() {
        assert!(ReqwestTransport::new().is_ok());
    }
}
