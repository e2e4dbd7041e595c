use thiserror::Error;

/// Errors surfaced by this crate.
///
/// Expected, frequent failures (missing template arguments, refused
/// connections, server-side query errors) are always returned as values;
/// library code never panics on them. Driver messages are carried verbatim.
#[derive(Debug, Error)]
pub enum PgSimpleError {
    /// A query template contained more `?` placeholders than arguments.
    #[error("Not enough arguments for format.\n")]
    InsufficientArguments,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),
}
