//! ドメイン型（Newtype）
//!
//! String を直接運ばず、意味のある型に包んで境界を明確にする。

/// catch API のデフォルトのベース URL
pub const DEFAULT_API_BASE: &str = "https://api.catch.com/v3/streams";

/// 利用するストリーム名（本ツールでは常に default）
pub const DEFAULT_STREAM: &str = "default";

/// API の認証情報（URL の userinfo に埋め込む）
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// パスワードをログやパニックメッセージに出さない
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// ストリーム API のベース URL（例: https://api.catch.com/v3/streams）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim_end_matches('/').to_string())
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl std::ops::Deref for ApiBase {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// ストリーム名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamName(String);

impl Default for StreamName {
    fn default() -> Self {
        Self(DEFAULT_STREAM.to_string())
    }
}

impl std::ops::Deref for StreamName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for StreamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// メモ ID（CLI から受け取るものはサーバ側で解釈される不透明な文字列）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoId(String);

impl MemoId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for MemoId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for MemoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_password() {
        let c = Credentials::new("namae", "oshienai");
        let s = format!("{:?}", c);
        assert!(s.contains("namae"));
        assert!(!s.contains("oshienai"));
    }

    #[test]
    fn test_api_base_trims_trailing_slash() {
        assert_eq!(&*ApiBase::new("http://localhost:8080/v3/streams/"), "http://localhost:8080/v3/streams");
        assert_eq!(&*ApiBase::default(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_stream_default() {
        assert_eq!(StreamName::default().to_string(), "default");
    }
}
