//! Gateway trait over the `employee` table
//!
//! "No matching row" is never an error here: lookups return an empty `Vec`
//! and mutations return an affected-row count of zero. Only driver failures
//! and body values the table cannot store surface as [`GatewayError`].

use async_trait::async_trait;

use crate::models::{Employee, EmployeePatch, InvalidValue, NewEmployee};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("rejected value: {0}")]
    InvalidValue(#[from] InvalidValue),
}

/// Operations the HTTP layer needs from the employee store (testable)
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    /// All rows in insertion order.
    async fn list(&self) -> Result<Vec<Employee>, GatewayError>;

    /// Rows whose id equals the raw path segment `id`.
    async fn find(&self, id: &str) -> Result<Vec<Employee>, GatewayError>;

    /// Insert a row and return the generated id.
    async fn insert(&self, employee: &NewEmployee) -> Result<i64, GatewayError>;

    /// Coalesce-on-null update. Returns affected rows.
    async fn update(&self, id: &str, patch: &EmployeePatch) -> Result<u64, GatewayError>;

    /// Hard delete. Returns affected rows.
    async fn delete(&self, id: &str) -> Result<u64, GatewayError>;

    /// Evaluate `1 + 1` in the store.
    async fn ping(&self) -> Result<i64, GatewayError>;
}

/// Interpret a path segment as a primary key.
///
/// Ids are not validated at the routing layer. A segment that is not an
/// integer can never equal a stored key, so callers treat `None` as "matches
/// no row".
pub fn parse_key(id: &str) -> Option<i64> {
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segment_parses() {
        assert_eq!(parse_key("42"), Some(42));
        assert_eq!(parse_key("-3"), Some(-3));
    }

    #[test]
    fn non_numeric_segment_matches_nothing() {
        assert_eq!(parse_key("abc"), None);
        assert_eq!(parse_key("1abc"), None);
        assert_eq!(parse_key(""), None);
    }
}
