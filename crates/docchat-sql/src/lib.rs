//! Text-to-SQL mode: the LLM writes a query, SQLite runs it.

pub mod error;
pub mod executor;
pub mod translator;

pub use error::SqlError;
pub use executor::{QueryOutput, SqlExecutor, NO_ROWS_MESSAGE};
pub use translator::{strip_code_fence, SqlTranslator};
