//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: common::ports::outbound（FS・環境変数・ログ・HTTP）をそのまま使う

pub mod inbound;
