//! Idempotent schema bootstrap.

use crate::connection::{release, ConnectionProvider};
use crate::error::DbError;
use sqlx::mysql::MySqlConnection;

/// The one table this application owns.
pub const CUSTOMERS_TABLE: &str = "CUSTOMERS";

const CREATE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS CUSTOMERS (
    customer_id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(50) NOT NULL,
    email VARCHAR(50) NOT NULL,
    phone VARCHAR(15) NOT NULL,
    address VARCHAR(100) NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Quotes a MySQL identifier with backticks, doubling any embedded backtick.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// The bootstrap batch, in execution order.
///
/// Every statement is a no-op when its object already exists.
pub fn bootstrap_statements(database: &str) -> Vec<String> {
    let database = quote_identifier(database);
    vec![
        format!("CREATE DATABASE IF NOT EXISTS {database}"),
        format!("USE {database}"),
        CREATE_CUSTOMERS_TABLE.trim().to_string(),
    ]
}

/// Creates the application database and the `CUSTOMERS` table if they are
/// missing. Safe to call on every start.
///
/// Returns `DbError::ConnectionError` when the server cannot be reached and
/// `DbError::SchemaError` when any DDL statement fails.
pub async fn ensure_schema(provider: &ConnectionProvider) -> Result<(), DbError> {
    let mut conn = provider.open_server().await?;
    let result = run_bootstrap(&mut conn, provider.database()).await;
    release(conn).await;
    result?;

    tracing::info!(database = %provider.database(), table = CUSTOMERS_TABLE, "Database and table are set up.");
    Ok(())
}

async fn run_bootstrap(conn: &mut MySqlConnection, database: &str) -> Result<(), DbError> {
    for statement in bootstrap_statements(database) {
        tracing::debug!(%statement, "Running bootstrap statement.");
        // `USE` cannot be prepared, so the batch goes over the text protocol.
        sqlx::raw_sql(&statement)
            .execute(&mut *conn)
            .await
            .map_err(DbError::SchemaError)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_backtick_quoted() {
        assert_eq!(quote_identifier("new_database2"), "`new_database2`");
        assert_eq!(quote_identifier("odd`name"), "`odd``name`");
    }

    #[test]
    fn bootstrap_creates_database_then_switches_then_creates_table() {
        let statements = bootstrap_statements("crm");
        assert_eq!(statements.len(), 3);
        assert_eq!(statements[0], "CREATE DATABASE IF NOT EXISTS `crm`");
        assert_eq!(statements[1], "USE `crm`");
        assert!(statements[2].starts_with("CREATE TABLE IF NOT EXISTS CUSTOMERS"));
    }

    #[test]
    fn customers_table_has_every_column() {
        let ddl = &bootstrap_statements("crm")[2];
        for column in [
            "customer_id INT AUTO_INCREMENT PRIMARY KEY",
            "name VARCHAR(50) NOT NULL",
            "email VARCHAR(50) NOT NULL",
            "phone VARCHAR(15) NOT NULL",
            "address VARCHAR(100) NOT NULL",
            "created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP",
        ] {
            assert!(ddl.contains(column), "missing column definition: {column}");
        }
    }

    #[test]
    fn every_statement_is_idempotent() {
        for statement in bootstrap_statements("crm") {
            assert!(statement.starts_with("USE") || statement.contains("IF NOT EXISTS"));
        }
    }
}
