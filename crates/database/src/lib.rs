//! # Customer Desk Database Crate
//!
//! This crate is the only place in the workspace that speaks SQL. It owns
//! the connection lifecycle, the idempotent schema bootstrap, and the
//! customer repository.
//!
//! ## Principles
//!
//! - **Connection per call:** Every operation opens its own connection through
//!   the `ConnectionProvider` and releases it before returning. Nothing is
//!   pooled and nothing is held between user interactions.
//! - **Bound parameters only:** User input never becomes part of a statement's
//!   text. The only interpolated values are database identifiers, and those
//!   come from configuration and are quoted.
//! - **Dynamic columns:** Reads report whatever columns the live table has,
//!   taken from the statement metadata.
//!
//! ## Public API
//!
//! - `ConnectionProvider`: builds scoped connections from `DbSettings`.
//! - `ensure_schema`: creates the database and the `CUSTOMERS` table if needed.
//! - `CustomerStore` / `CustomerRepository`: create, read, update, delete.
//! - `DbError`: connection, schema and query failures.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod query;
pub mod repository;
pub mod schema;

// Re-export the key components to create a clean, public-facing API.
pub use connection::ConnectionProvider;
pub use error::DbError;
pub use repository::{CustomerRepository, CustomerStore};
pub use schema::ensure_schema;
