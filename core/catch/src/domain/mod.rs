//! catch 固有のドメイン型（型と不変条件）

pub mod command;
pub mod memo;
pub mod search;

pub use command::CatchCommand;
pub use memo::{Memo, ServerModifiedAt};
pub use search::{SearchQuery, SortOrder};
