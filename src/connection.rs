use postgres::{Client, NoTls};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cursor::Cursor;
use crate::error::PgSimpleError;
use crate::executor::run_query;

/// Connection settings; every field is optional and defaults to `""`.
///
/// An empty field is left out of the driver configuration entirely, so the
/// driver's own defaults apply (environment variables, default port, and so
/// on). `port` is a string for interface compatibility and must parse as a
/// number when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectOptions {
    pub host: String,
    pub port: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl ConnectOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    #[must_use]
    pub fn with_dbname(mut self, dbname: impl Into<String>) -> Self {
        self.dbname = dbname.into();
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
}

/// An open session with a PostgreSQL server.
///
/// A `Conn` exclusively owns its client; dropping it closes the session.
/// Cursors produced by [`query`](Conn::query) own their result buffers
/// independently and remain usable after the `Conn` is gone.
///
/// Precondition, not enforced internally: a `Conn` is a single-owner,
/// single-threaded resource. Blocking calls run to completion; there is no
/// timeout or cancellation at this layer.
pub struct Conn {
    client: Client,
}

impl Conn {
    /// Connect to the server described by `options`, blocking until the
    /// driver reports success or failure.
    ///
    /// # Errors
    /// [`PgSimpleError::ConfigError`] when a non-empty `port` does not parse
    /// as a number; [`PgSimpleError::ConnectionError`] carrying the driver's
    /// message for any connect failure (unreachable host, bad credentials,
    /// missing database). Never panics.
    pub fn open(options: &ConnectOptions) -> Result<Conn, PgSimpleError> {
        let mut config = postgres::Config::new();

        if !options.host.is_empty() {
            config.host(&options.host);
        }
        if !options.port.is_empty() {
            let port: u16 = options.port.parse().map_err(|_| {
                PgSimpleError::ConfigError(format!("invalid port: {}", options.port))
            })?;
            config.port(port);
        }
        if !options.dbname.is_empty() {
            config.dbname(&options.dbname);
        }
        if !options.user.is_empty() {
            config.user(&options.user);
        }
        if !options.password.is_empty() {
            config.password(&options.password);
        }

        let client = config
            .connect(NoTls)
            .map_err(|e| PgSimpleError::ConnectionError(e.to_string()))?;

        debug!(host = %options.host, dbname = %options.dbname, "session opened");
        Ok(Conn { client })
    }

    /// Bind `?` placeholders in `template` from `args`, run the bound query,
    /// and return a [`Cursor`] over the result.
    ///
    /// # Errors
    /// [`PgSimpleError::InsufficientArguments`] when `args` runs out before
    /// the placeholders do; [`PgSimpleError::ExecutionError`] with the
    /// driver's message when the server rejects the query.
    pub fn query(&mut self, template: &str, args: &[String]) -> Result<Cursor, PgSimpleError> {
        run_query(&mut self.client, template, args)
    }
}
