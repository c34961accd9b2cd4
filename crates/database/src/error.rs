use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The server could not be reached, rejected the credentials, or does not
    /// have the requested database.
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Failed to set up the database schema: {0}")]
    SchemaError(#[source] sqlx::Error),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),
}

impl DbError {
    /// True when the failure happened before any statement could run.
    pub fn is_connection(&self) -> bool {
        matches!(self, DbError::ConnectionError(_))
    }
}
