use crate::connection::{release, ConnectionProvider};
use crate::error::DbError;
use crate::query::{self, ReadParam};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use core_types::{CustomerFilter, NewCustomer, RecordSet, WriteOutcome};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Executor, Row, Statement, TypeInfo};

/// Rendering of a SQL `NULL` cell.
pub const NULL_CELL: &str = "NULL";

const UNREADABLE_CELL: &str = "<unreadable>";

/// The persistence contract the menu works against.
///
/// `CustomerRepository` is the MySQL implementation; tests substitute an
/// in-memory one.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Inserts a customer and returns the id the database assigned.
    async fn create(&self, customer: &NewCustomer) -> Result<u64, DbError>;

    /// Returns the rows matching `filter`, in storage order.
    async fn read(&self, filter: &CustomerFilter) -> Result<RecordSet, DbError>;

    /// Overwrites all four mutable fields of the customer with `id`.
    async fn update(&self, id: u64, customer: &NewCustomer) -> Result<WriteOutcome, DbError>;

    /// Removes the customer with `id`.
    async fn delete(&self, id: u64) -> Result<WriteOutcome, DbError>;
}

/// The `CustomerRepository` runs each operation as one bound statement on
/// its own connection.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    provider: ConnectionProvider,
}

impl CustomerRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CustomerStore for CustomerRepository {
    async fn create(&self, customer: &NewCustomer) -> Result<u64, DbError> {
        let mut conn = self.provider.open().await?;
        let result = sqlx::query(query::INSERT_CUSTOMER)
            .bind(customer.name())
            .bind(customer.email())
            .bind(customer.phone())
            .bind(customer.address())
            .execute(&mut conn)
            .await;
        release(conn).await;

        let id = result?.last_insert_id();
        tracing::info!(customer_id = id, "Customer record created.");
        Ok(id)
    }

    async fn read(&self, filter: &CustomerFilter) -> Result<RecordSet, DbError> {
        let mut conn = self.provider.open().await?;
        let result = fetch_record_set(&mut conn, filter).await;
        release(conn).await;

        let records = result?;
        tracing::debug!(?filter, rows = records.len(), "Customer read complete.");
        Ok(records)
    }

    async fn update(&self, id: u64, customer: &NewCustomer) -> Result<WriteOutcome, DbError> {
        let mut conn = self.provider.open().await?;
        let result = sqlx::query(query::UPDATE_CUSTOMER)
            .bind(customer.name())
            .bind(customer.email())
            .bind(customer.phone())
            .bind(customer.address())
            .bind(id)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let outcome = WriteOutcome::from_rows_affected(result?.rows_affected());
        tracing::info!(customer_id = id, ?outcome, "Customer update finished.");
        Ok(outcome)
    }

    async fn delete(&self, id: u64) -> Result<WriteOutcome, DbError> {
        let mut conn = self.provider.open().await?;
        let result = sqlx::query(query::DELETE_CUSTOMER)
            .bind(id)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let outcome = WriteOutcome::from_rows_affected(result?.rows_affected());
        tracing::info!(customer_id = id, ?outcome, "Customer delete finished.");
        Ok(outcome)
    }
}

/// Prepares the filter's statement, takes the column names from the prepared
/// statement's metadata, then runs it. The header is therefore known even
/// when no rows match.
async fn fetch_record_set(
    conn: &mut sqlx::MySqlConnection,
    filter: &CustomerFilter,
) -> Result<RecordSet, DbError> {
    let select = query::select_for(filter);
    let statement = (&mut *conn).prepare(select.sql).await?;

    let mut records = RecordSet::new(
        statement
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect(),
    );

    let bound = match select.param {
        Some(ReadParam::Id(id)) => statement.query().bind(id),
        Some(ReadParam::Pattern(pattern)) => statement.query().bind(pattern),
        None => statement.query(),
    };
    let rows = bound.fetch_all(&mut *conn).await?;

    records.rows = rows.iter().map(render_row).collect();
    Ok(records)
}

fn render_row(row: &MySqlRow) -> Vec<String> {
    (0..row.columns().len()).map(|idx| render_cell(row, idx)).collect()
}

/// How a cell is decoded, picked from the column's reported SQL type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Unsigned,
    Signed,
    Float,
    Timestamp,
    DateTime,
    Date,
    Text,
}

impl CellKind {
    fn for_type_name(type_name: &str) -> Self {
        let type_name = type_name.to_ascii_uppercase();
        match type_name.as_str() {
            t if t.ends_with("UNSIGNED") => CellKind::Unsigned,
            "BOOLEAN" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => CellKind::Signed,
            "FLOAT" | "DOUBLE" => CellKind::Float,
            "TIMESTAMP" => CellKind::Timestamp,
            "DATETIME" => CellKind::DateTime,
            "DATE" => CellKind::Date,
            _ => CellKind::Text,
        }
    }
}

/// Renders one cell as text, choosing the decode type from the column's
/// reported SQL type.
fn render_cell(row: &MySqlRow, idx: usize) -> String {
    let type_name = row.columns()[idx].type_info().name();

    let rendered = match CellKind::for_type_name(type_name) {
        CellKind::Unsigned => cell::<u64>(row, idx, |v| v.to_string()),
        CellKind::Signed => cell::<i64>(row, idx, |v| v.to_string()),
        CellKind::Float => cell::<f64>(row, idx, |v| v.to_string()),
        CellKind::Timestamp => cell::<DateTime<Utc>>(row, idx, format_timestamp),
        CellKind::DateTime => cell::<NaiveDateTime>(row, idx, |v| format_timestamp(v.and_utc())),
        CellKind::Date => cell::<NaiveDate>(row, idx, |v| v.to_string()),
        CellKind::Text => cell::<String>(row, idx, |v| v),
    };

    rendered
        .or_else(|_| cell::<Vec<u8>>(row, idx, |v| String::from_utf8_lossy(&v).into_owned()))
        .unwrap_or_else(|e| {
            tracing::warn!(column = idx, %type_name, error = %e, "Could not decode column value.");
            UNREADABLE_CELL.to_string()
        })
}

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn cell<T>(row: &MySqlRow, idx: usize, show: impl FnOnce(T) -> String) -> Result<String, sqlx::Error>
where
    T: for<'r> sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    Ok(row
        .try_get::<Option<T>, _>(idx)?
        .map(show)
        .unwrap_or_else(|| NULL_CELL.to_string()))
}
