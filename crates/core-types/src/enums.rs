/// Selects which customers a read returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerFilter {
    /// Exact match on `customer_id`.
    ById(u64),
    /// Case-insensitive substring match on `name`.
    ByNameContains(String),
    /// Case-insensitive substring match on `email`.
    ByEmailContains(String),
    /// Every row.
    All,
}

/// Result of a write addressed by id.
///
/// A missing row is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    NotFound,
}

impl WriteOutcome {
    /// Maps an affected-row count to an outcome.
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 {
            WriteOutcome::Applied
        } else {
            WriteOutcome::NotFound
        }
    }
}
