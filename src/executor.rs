use postgres::{Client, SimpleQueryMessage};
use tracing::debug;

use crate::binder::bind_template;
use crate::cursor::{Cursor, TextRows};
use crate::error::PgSimpleError;

/// The "execute one SQL string, get back a tabular text result" primitive.
///
/// Everything behind this seam (wire protocol, planning, retries, timeouts)
/// belongs to the native client. Implementations report failure with the
/// driver's message carried verbatim in
/// [`PgSimpleError::ExecutionError`].
pub trait QueryExecutor {
    /// Execute `sql` and return the resulting rows as nullable text.
    ///
    /// A statement that succeeds without producing rows (DML, DDL) returns an
    /// empty buffer, not an error.
    ///
    /// # Errors
    /// Returns [`PgSimpleError::ExecutionError`] when the backend rejects the
    /// statement or the session fails mid-query.
    fn execute_text(&mut self, sql: &str) -> Result<TextRows, PgSimpleError>;
}

/// Bind `template` against `args`, execute the bound query, and wrap the
/// result in a [`Cursor`].
///
/// Both bind failures and driver failures come back as `Err` values; a bind
/// failure never reaches the executor.
///
/// # Errors
/// [`PgSimpleError::InsufficientArguments`] from binding, or whatever the
/// executor reports.
pub fn run_query<E: QueryExecutor>(
    executor: &mut E,
    template: &str,
    args: &[String],
) -> Result<Cursor, PgSimpleError> {
    let sql = bind_template(template, args)?;
    let buffer = executor.execute_text(&sql)?;
    debug!(
        rows = buffer.row_count(),
        columns = buffer.column_count,
        "query returned"
    );
    Ok(Cursor::new(buffer))
}

/// Text-protocol execution over the blocking rust-postgres client.
///
/// `simple_query` sends the SQL as-is (no server-side parameters) and the
/// server replies with every field rendered as text, nullable per cell. With
/// multiple semicolon-separated statements in one string, only the last
/// statement's rows are kept.
impl QueryExecutor for Client {
    fn execute_text(&mut self, sql: &str) -> Result<TextRows, PgSimpleError> {
        let messages = self
            .simple_query(sql)
            .map_err(|e| PgSimpleError::ExecutionError(e.to_string()))?;

        let mut column_count = 0;
        let mut rows: Vec<Vec<Option<String>>> = Vec::new();

        for message in messages {
            match message {
                SimpleQueryMessage::RowDescription(columns) => {
                    // A new result set starts; discard any earlier one.
                    column_count = columns.len();
                    rows.clear();
                }
                SimpleQueryMessage::Row(row) => {
                    column_count = row.len();
                    let cells = (0..row.len())
                        .map(|idx| row.get(idx).map(str::to_string))
                        .collect();
                    rows.push(cells);
                }
                SimpleQueryMessage::CommandComplete(_) => {}
                _ => {}
            }
        }

        Ok(TextRows::new(column_count, rows))
    }
}
