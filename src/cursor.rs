/// Literal text substituted for NULL fields during row iteration.
///
/// Callers cannot distinguish a database NULL from a text field whose content
/// happens to be this string; that ambiguity is part of the contract.
pub const NULL_TEXT: &str = "(null)";

/// A rectangular buffer of nullable text cells, as handed over by an executor.
///
/// Public so callers can fabricate result buffers when implementing
/// [`QueryExecutor`](crate::executor::QueryExecutor) themselves (tests do the
/// same).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRows {
    /// Number of columns in every row.
    pub column_count: usize,
    /// Row-major cells; `None` is a database NULL.
    pub rows: Vec<Vec<Option<String>>>,
}

impl TextRows {
    #[must_use]
    pub fn new(column_count: usize, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { column_count, rows }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Forward-only view over the result of a successful query.
///
/// A `Cursor` exclusively owns its result buffer, independently of the
/// [`Conn`](crate::connection::Conn) that produced it; it stays usable after
/// the connection is gone. [`close`](Cursor::close) releases the buffer and is
/// idempotent; dropping the cursor releases it too.
///
/// Not synchronized: a cursor is a single-owner, single-threaded resource.
#[derive(Debug)]
pub struct Cursor {
    buffer: Option<TextRows>,
    row_count: usize,
    column_count: usize,
}

impl Cursor {
    /// Only a successful query execution produces a cursor.
    pub(crate) fn new(buffer: TextRows) -> Self {
        let row_count = buffer.row_count();
        let column_count = buffer.column_count;
        Self {
            buffer: Some(buffer),
            row_count,
            column_count,
        }
    }

    /// Number of rows in the result. Reads zero once the cursor is closed.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns in the result. Unaffected by `close`.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.buffer.is_none()
    }

    /// Release the underlying result buffer.
    ///
    /// Idempotent: closing an already-closed cursor does nothing. After the
    /// first call, [`row_count`](Cursor::row_count) reads zero and
    /// [`each_row`](Cursor::each_row) performs no iteration.
    pub fn close(&mut self) {
        self.buffer = None;
        self.row_count = 0;
    }

    /// Invoke `f` once per row, in ascending row order.
    ///
    /// Each row is materialized as exactly `column_count` strings, NULL
    /// fields rendered as [`NULL_TEXT`], and only after the callback has
    /// returned for the previous row. A closed or empty cursor performs no
    /// calls and returns `Ok(())`. An `Err` from the callback is returned
    /// as-is; the remaining rows are never delivered.
    ///
    /// # Errors
    /// Only errors produced by the callback itself.
    pub fn each_row<F, E>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&[String]) -> Result<(), E>,
    {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };
        if self.row_count == 0 {
            return Ok(());
        }

        for row in &buffer.rows {
            let fields: Vec<String> = (0..self.column_count)
                .map(|col| match row.get(col) {
                    Some(Some(text)) => text.clone(),
                    _ => NULL_TEXT.to_string(),
                })
                .collect();
            f(&fields)?;
        }

        Ok(())
    }
}
