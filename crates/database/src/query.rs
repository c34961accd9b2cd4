//! SQL text for every repository statement.
//!
//! Nothing here touches a connection. Values always travel as bound
//! parameters; the functions below only decide which statement to run and
//! what to bind.

use core_types::CustomerFilter;

pub const INSERT_CUSTOMER: &str =
    "INSERT INTO CUSTOMERS (name, email, phone, address) VALUES (?, ?, ?, ?)";

pub const UPDATE_CUSTOMER: &str =
    "UPDATE CUSTOMERS SET name = ?, email = ?, phone = ?, address = ? WHERE customer_id = ?";

pub const DELETE_CUSTOMER: &str = "DELETE FROM CUSTOMERS WHERE customer_id = ?";

const SELECT_BY_ID: &str = "SELECT * FROM CUSTOMERS WHERE customer_id = ?";
const SELECT_BY_NAME: &str = "SELECT * FROM CUSTOMERS WHERE LOWER(name) LIKE LOWER(?) ESCAPE '!'";
const SELECT_BY_EMAIL: &str = "SELECT * FROM CUSTOMERS WHERE LOWER(email) LIKE LOWER(?) ESCAPE '!'";
const SELECT_ALL: &str = "SELECT * FROM CUSTOMERS";

/// `!` rather than backslash so the escape survives `NO_BACKSLASH_ESCAPES`.
const LIKE_ESCAPE: char = '!';

/// The single parameter a read binds, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadParam {
    Id(u64),
    Pattern(String),
}

/// A read statement ready to prepare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub sql: &'static str,
    pub param: Option<ReadParam>,
}

/// Picks the statement for a filter. No `ORDER BY`: row order is whatever
/// the storage engine returns.
pub fn select_for(filter: &CustomerFilter) -> SelectStatement {
    match filter {
        CustomerFilter::ById(id) => SelectStatement {
            sql: SELECT_BY_ID,
            param: Some(ReadParam::Id(*id)),
        },
        CustomerFilter::ByNameContains(term) => SelectStatement {
            sql: SELECT_BY_NAME,
            param: Some(ReadParam::Pattern(contains_pattern(term))),
        },
        CustomerFilter::ByEmailContains(term) => SelectStatement {
            sql: SELECT_BY_EMAIL,
            param: Some(ReadParam::Pattern(contains_pattern(term))),
        },
        CustomerFilter::All => SelectStatement {
            sql: SELECT_ALL,
            param: None,
        },
    }
}

/// Wraps a search term in `%` wildcards, escaping any LIKE metacharacters it
/// contains so they match literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_id_is_an_exact_match_on_the_key() {
        let statement = select_for(&CustomerFilter::ById(7));
        assert_eq!(statement.sql, "SELECT * FROM CUSTOMERS WHERE customer_id = ?");
        assert_eq!(statement.param, Some(ReadParam::Id(7)));
    }

    #[test]
    fn name_and_email_searches_are_case_insensitive_substring_matches() {
        let name = select_for(&CustomerFilter::ByNameContains("smith".into()));
        assert!(name.sql.contains("LOWER(name) LIKE LOWER(?)"));
        assert_eq!(name.param, Some(ReadParam::Pattern("%smith%".into())));

        let email = select_for(&CustomerFilter::ByEmailContains("a@b.com".into()));
        assert!(email.sql.contains("LOWER(email) LIKE LOWER(?)"));
        assert_eq!(email.param, Some(ReadParam::Pattern("%a@b.com%".into())));
    }

    #[test]
    fn all_binds_nothing_and_has_no_ordering() {
        let statement = select_for(&CustomerFilter::All);
        assert_eq!(statement.sql, "SELECT * FROM CUSTOMERS");
        assert_eq!(statement.param, None);
    }

    #[test]
    fn no_read_statement_interpolates_user_input() {
        let nasty = "x'; DROP TABLE CUSTOMERS; --";
        for filter in [
            CustomerFilter::ByNameContains(nasty.into()),
            CustomerFilter::ByEmailContains(nasty.into()),
        ] {
            assert!(!select_for(&filter).sql.contains("DROP"));
        }
    }

    #[test]
    fn like_metacharacters_in_the_term_are_escaped() {
        assert_eq!(contains_pattern("50%"), "%50!%%");
        assert_eq!(contains_pattern("first_last"), "%first!_last%");
        assert_eq!(contains_pattern("wow!"), "%wow!!%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn write_statements_use_placeholders_for_every_value() {
        assert_eq!(INSERT_CUSTOMER.matches('?').count(), 4);
        assert_eq!(UPDATE_CUSTOMER.matches('?').count(), 5);
        assert_eq!(DELETE_CUSTOMER.matches('?').count(), 1);
    }
}
