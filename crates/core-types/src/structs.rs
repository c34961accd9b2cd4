use crate::error::ValidationError;
use crate::validation::{validate_email, validate_non_empty, validate_phone};

/// The four caller-supplied fields of a customer, already validated.
///
/// The only way to build one is [`NewCustomer::new`], so a value of this type
/// is proof that every field passed its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    name: String,
    email: String,
    phone: String,
    address: String,
}

impl NewCustomer {
    pub fn new(name: &str, email: &str, phone: &str, address: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_non_empty(name)?,
            email: validate_email(email)?,
            phone: validate_phone(phone)?,
            address: validate_non_empty(address)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

/// A read result, shaped by whatever columns the query actually returned.
///
/// Cells are already rendered to text; `NULL` is rendered as `"NULL"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a cell by row index and column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_cleans_every_field() {
        let customer =
            NewCustomer::new(" John Smithson ", "john@smith.io ", " 5551234567", " 1 Main St ").unwrap();
        assert_eq!(customer.name(), "John Smithson");
        assert_eq!(customer.email(), "john@smith.io");
        assert_eq!(customer.phone(), "5551234567");
        assert_eq!(customer.address(), "1 Main St");
    }

    #[test]
    fn new_customer_rejects_the_first_bad_field() {
        assert_eq!(
            NewCustomer::new("", "bad", "1", ""),
            Err(ValidationError::Empty)
        );
        assert_eq!(
            NewCustomer::new("Jo", "bad", "1", ""),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            NewCustomer::new("Jo", "jo@x.com", "1", ""),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            NewCustomer::new("Jo", "jo@x.com", "1234567890", "  "),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn record_set_looks_up_cells_by_column_name() {
        let mut set = RecordSet::new(vec!["customer_id".into(), "name".into()]);
        assert!(set.is_empty());
        set.rows.push(vec!["1".into(), "Ada".into()]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.value(0, "name"), Some("Ada"));
        assert_eq!(set.value(0, "email"), None);
        assert_eq!(set.value(1, "name"), None);
    }
}
