//! Runs SQL against a SQLite database and tabulates the result.
//!
//! Statements are executed as given. There is no validation or sandboxing,
//! so the database should be one the user is happy to let the LLM touch.

use std::fmt;
use std::path::Path;
use std::sync::Mutex;

use docchat_core::TextTable;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use tracing::info;

use crate::error::SqlError;

/// Message shown for statements that return no columns.
pub const NO_ROWS_MESSAGE: &str = "Query executed successfully (no returned rows).";

/// Result of one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutput {
    /// The statement returned columns (possibly zero rows).
    Rows(TextTable),
    /// The statement returned no columns; carries the changed row count.
    Affected(usize),
}

impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutput::Rows(table) => f.write_str(&table.render_grid()),
            QueryOutput::Affected(_) => f.write_str(NO_ROWS_MESSAGE),
        }
    }
}

/// SQLite connection shared behind a mutex.
pub struct SqlExecutor {
    conn: Mutex<Connection>,
}

impl SqlExecutor {
    /// Open (or create) a database file, creating parent directories.
    pub fn open(path: &Path) -> Result<Self, SqlError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SqlError::Open(e.to_string()))?;
            }
        }
        let conn = Connection::open(path).map_err(|e| SqlError::Open(e.to_string()))?;
        info!(path = %path.display(), "Database opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self, SqlError> {
        let conn = Connection::open_in_memory().map_err(|e| SqlError::Open(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute one statement.
    pub fn execute(&self, sql: &str) -> Result<QueryOutput, SqlError> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SqlError::EmptyQuery);
        }

        let conn = self
            .conn
            .lock()
            .map_err(|e| SqlError::Lock(e.to_string()))?;
        let mut stmt = conn.prepare(sql)?;

        if stmt.column_count() == 0 {
            let affected = stmt.execute([])?;
            info!(affected, "Statement executed");
            return Ok(QueryOutput::Affected(affected));
        }

        let headers: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let columns = headers.len();
        let mut table = TextTable::new(headers);

        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(columns);
            for i in 0..columns {
                cells.push(render_value(row.get_ref(i)?));
            }
            table.push_row(cells);
        }

        info!(rows = table.rows.len(), columns, "Query executed");
        Ok(QueryOutput::Rows(table))
    }

    /// Run a batch of statements, e.g. schema setup. Returns nothing.
    pub fn execute_batch(&self, sql: &str) -> Result<(), SqlError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SqlError::Lock(e.to_string()))?;
        conn.execute_batch(sql)?;
        Ok(())
    }
}

impl fmt::Debug for SqlExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlExecutor").finish()
    }
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
