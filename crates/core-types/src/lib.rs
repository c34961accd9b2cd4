//! # Customer Desk Core Types
//!
//! The foundational vocabulary shared by every other crate in the workspace:
//! the customer record as it is written and read, the read filters, and the
//! pure validation rules that every user-supplied field must pass before it
//! is allowed anywhere near the database.
//!
//! This crate performs no I/O.

pub mod enums;
pub mod error;
pub mod structs;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use enums::{CustomerFilter, WriteOutcome};
pub use error::ValidationError;
pub use structs::{NewCustomer, RecordSet};
