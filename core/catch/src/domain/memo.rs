//! サーバから返されるメモ

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 楽観的排他制御のトークン（サーバの値をそのまま送り返す）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerModifiedAt(Value);

impl ServerModifiedAt {
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// クエリパラメータ用の文字列（文字列はクォートなし、数値は 10 進）
    pub fn as_query_value(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// リモートのメモ（result.objects の 1 要素）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    /// 欠けている・null の場合は空文字列（一覧表示では使わないため）
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default)]
    pub server_modified_at: Option<ServerModifiedAt>,
    /// その他のフィールドは解釈せず保持する
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memo_deserialize_keeps_extra_fields() {
        let m: Memo = serde_json::from_value(json!({
            "id": "x9",
            "text": "bye",
            "server_modified_at": "2013-02-20T12:00:00.000Z",
            "created_at": "2013-02-14T00:00:00.000Z",
            "tags": []
        }))
        .unwrap();
        assert_eq!(m.id, "x9");
        assert_eq!(m.text, "bye");
        assert_eq!(
            m.server_modified_at.unwrap().as_query_value(),
            "2013-02-20T12:00:00.000Z"
        );
        assert!(m.extra.contains_key("created_at"));
        assert!(m.extra.contains_key("tags"));
    }

    #[test]
    fn test_memo_numeric_id_and_timestamp() {
        let m: Memo =
            serde_json::from_value(json!({"id": 42, "text": "a", "server_modified_at": 1000}))
                .unwrap();
        assert_eq!(m.id, "42");
        let ts = m.server_modified_at.unwrap();
        assert_eq!(ts.as_query_value(), "1000");
        assert_eq!(ts.as_json(), &json!(1000));
    }

    #[test]
    fn test_memo_without_timestamp() {
        let m: Memo = serde_json::from_value(json!({"id": "a"})).unwrap();
        assert!(m.server_modified_at.is_none());
        assert_eq!(m.text, "");
    }

    #[test]
    fn test_memo_null_text_and_missing_id_are_empty() {
        let m: Memo = serde_json::from_value(json!({"text": null})).unwrap();
        assert_eq!(m.id, "");
        assert_eq!(m.text, "");
        let m: Memo = serde_json::from_value(json!({"id": null, "text": "a"})).unwrap();
        assert_eq!(m.id, "");
        assert_eq!(m.text, "a");
    }

    #[test]
    fn test_memo_rejects_object_id() {
        assert!(serde_json::from_value::<Memo>(json!({"id": {"x": 1}})).is_err());
    }
}
