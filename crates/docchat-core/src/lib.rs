pub mod config;
pub mod error;
pub mod table;
pub mod types;

pub use config::DocChatConfig;
pub use error::{DocChatError, Result};
pub use table::TextTable;
pub use types::*;
