//! In-memory gateway
//!
//! Same observable behavior as the Postgres gateway without a database:
//! ids start at 1 and are never reused, each call holds the table lock for
//! its whole duration so operations are atomic. Used by the router tests and
//! by `employees serve --in-memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::gateway::{parse_key, EmployeeGateway, GatewayError};
use crate::models::{Employee, EmployeePatch, NewEmployee};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Employee>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Employee gateway holding rows in process memory
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    table: RwLock<Table>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EmployeeGateway for InMemoryGateway {
    async fn list(&self) -> Result<Vec<Employee>, GatewayError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find(&self, id: &str) -> Result<Vec<Employee>, GatewayError> {
        let Some(key) = parse_key(id) else {
            return Ok(Vec::new());
        };

        let table = self.table.read().await;
        Ok(table.rows.get(&key).cloned().into_iter().collect())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i64, GatewayError> {
        let columns = employee.columns()?;

        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, columns.into_employee(id));
        Ok(id)
    }

    async fn update(&self, id: &str, patch: &EmployeePatch) -> Result<u64, GatewayError> {
        let columns = patch.columns()?;
        let Some(key) = parse_key(id) else {
            return Ok(0);
        };

        let mut table = self.table.write().await;
        match table.rows.get_mut(&key) {
            Some(employee) => {
                columns.apply(employee);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64, GatewayError> {
        let Some(key) = parse_key(id) else {
            return Ok(0);
        };

        let mut table = self.table.write().await;
        Ok(u64::from(table.rows.remove(&key).is_some()))
    }

    async fn ping(&self) -> Result<i64, GatewayError> {
        Ok(1 + 1)
    }
}
