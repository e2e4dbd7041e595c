//! Small synchronous wrapper over the rust-postgres client.
//!
//! Queries are written as templates with positional `?` placeholders bound to
//! string arguments, executed over the simple-query (text) protocol, and read
//! back through a forward-only [`Cursor`] of text fields, NULLs rendered as
//! the literal [`NULL_TEXT`].
//!
//! Binding is lexical and verbatim: no quoting, no escaping, and a `?` inside
//! a string literal is still a placeholder. The wrapped driver is the
//! authority on everything else; all expected failures come back as
//! [`PgSimpleError`] values rather than panics.
//!
//! ```no_run
//! use pg_simple::prelude::*;
//!
//! fn main() -> Result<(), PgSimpleError> {
//!     let options = ConnectOptions::new()
//!         .with_host("localhost")
//!         .with_dbname("app")
//!         .with_user("svc");
//!     let mut conn = Conn::open(&options)?;
//!
//!     let cursor = conn.query(
//!         "select name, email from users where id = ?",
//!         &["42".to_string()],
//!     )?;
//!     cursor.each_row(|row| {
//!         println!("{} <{}>", row[0], row[1]);
//!         Ok::<_, PgSimpleError>(())
//!     })?;
//!     Ok(())
//! }
//! ```

pub mod binder;
pub mod connection;
pub mod cursor;
pub mod error;
pub mod executor;
pub mod prelude;

pub use binder::bind_template;
pub use connection::{Conn, ConnectOptions};
pub use cursor::{Cursor, NULL_TEXT, TextRows};
pub use error::PgSimpleError;
pub use executor::{QueryExecutor, run_query};
