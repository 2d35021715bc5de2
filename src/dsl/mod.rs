pub mod dispatch;
pub mod fields;
pub mod keywords;
pub mod parser;
pub mod raw;

pub use dispatch::{Dispatched, Dispatcher, KeyPolicy};
pub use keywords::{HandlerKind, JobKeyword, KeywordHandler, TopLevelKeyword, Vocabulary};
pub use parser::{parse_dsl, DslFormat};
pub use raw::{RawMap, RawNode};
