//! 一覧取得（GET /streams/default）のクエリパラメータ

use common::domain::MemoId;
use common::error::Error;

/// 一覧を取得するときのデフォルト件数
pub const DEFAULT_LIST_LIMIT: u32 = 5;

/// サーバ側で解釈される並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    ModifiedDesc,
    ModifiedAsc,
    CreatedDesc,
    CreatedAsc,
}

impl SortOrder {
    /// CLI で受け付ける名前（API のパラメータ値そのまま）
    pub const NAMES: [&'static str; 4] =
        ["modified_desc", "modified_asc", "created_desc", "created_asc"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::ModifiedDesc => "modified_desc",
            SortOrder::ModifiedAsc => "modified_asc",
            SortOrder::CreatedDesc => "created_desc",
            SortOrder::CreatedAsc => "created_asc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modified_desc" => Ok(SortOrder::ModifiedDesc),
            "modified_asc" => Ok(SortOrder::ModifiedAsc),
            "created_desc" => Ok(SortOrder::CreatedDesc),
            "created_asc" => Ok(SortOrder::CreatedAsc),
            other => Err(Error::invalid_argument(format!(
                "Unknown sort order: {}. Supported: {}",
                other,
                SortOrder::NAMES.join(", ")
            ))),
        }
    }
}

/// 検索クエリ
///
/// `limit` は文字列で持つ。API は limit の位置に ID を渡すとそのメモを返すため、
/// ID 検索（`by_id`）でも同じエンドポイントを使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub limit: String,
    pub offset: u32,
    pub sort: SortOrder,
    pub full: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT.to_string(),
            offset: 0,
            sort: SortOrder::default(),
            full: true,
        }
    }
}

impl SearchQuery {
    /// 最新 `limit` 件の一覧
    pub fn list(limit: u32, sort: SortOrder) -> Self {
        Self {
            limit: limit.to_string(),
            sort,
            ..Self::default()
        }
    }

    /// ID によるメモの取得（limit に ID を入れる）
    pub fn by_id(id: &MemoId) -> Self {
        Self {
            limit: id.to_string(),
            ..Self::default()
        }
    }

    /// クエリ文字列のペア（limit, offset, full, sort の順）
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("limit", self.limit.clone()),
            ("offset", self.offset.to_string()),
            ("full", if self.full { "1" } else { "0" }.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let q = SearchQuery::default();
        let pairs = q.query_pairs();
        assert_eq!(pairs[0], ("limit", "5".to_string()));
        assert_eq!(pairs[1], ("offset", "0".to_string()));
        assert_eq!(pairs[2], ("full", "1".to_string()));
        assert_eq!(pairs[3], ("sort", "modified_desc".to_string()));
    }

    #[test]
    fn test_by_id_puts_id_in_limit() {
        let q = SearchQuery::by_id(&MemoId::new("7"));
        assert_eq!(q.limit, "7");
        assert_eq!(q.sort, SortOrder::ModifiedDesc);
    }

    #[test]
    fn test_sort_order_parse() {
        for name in SortOrder::NAMES {
            let s: SortOrder = name.parse().unwrap();
            assert_eq!(s.as_str(), name);
        }
        let err = "newest".parse::<SortOrder>().unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }
}
