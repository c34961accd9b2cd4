use crate::error::DbError;
use configuration::DbSettings;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

/// Hands out single-use connections built from immutable settings.
///
/// The provider holds no connection itself. Each `open` dials the server,
/// and the caller gives the connection back with [`release`] once its one
/// statement has run. A connection that is simply dropped (for example on an
/// early `?` return) is closed by the driver as well.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    server: MySqlConnectOptions,
    database: String,
}

impl ConnectionProvider {
    pub fn new(settings: &DbSettings) -> Self {
        let server = MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password);

        Self {
            server,
            database: settings.database_name().to_string(),
        }
    }

    /// The database CRUD connections select.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Opens a connection with the application database selected.
    pub async fn open(&self) -> Result<MySqlConnection, DbError> {
        let options = self.server.clone().database(&self.database);
        tracing::debug!(database = %self.database, "Opening database connection.");
        MySqlConnection::connect_with(&options)
            .await
            .map_err(DbError::ConnectionError)
    }

    /// Opens a connection with no default database, for bootstrapping a
    /// server where the application database may not exist yet.
    pub async fn open_server(&self) -> Result<MySqlConnection, DbError> {
        tracing::debug!("Opening server connection.");
        MySqlConnection::connect_with(&self.server)
            .await
            .map_err(DbError::ConnectionError)
    }
}

/// Closes a connection, sending the protocol-level quit.
///
/// A failure to close is logged and otherwise ignored; the operation that
/// used the connection has already produced its result.
pub async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection cleanly.");
    }
}
