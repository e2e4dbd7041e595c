//! Convenient imports for common functionality.

pub use crate::binder::bind_template;
pub use crate::connection::{Conn, ConnectOptions};
pub use crate::cursor::{Cursor, NULL_TEXT, TextRows};
pub use crate::error::PgSimpleError;
pub use crate::executor::{QueryExecutor, run_query};
