//! Postgres gateway
//!
//! One parameterized statement per operation:
//! - list/find: SELECT ordered by id
//! - insert: INSERT ... RETURNING id
//! - update: COALESCE per column so omitted fields keep their value
//! - delete: hard DELETE, existence checked via rows_affected

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::gateway::{parse_key, EmployeeGateway, GatewayError};
use super::migrations;
use crate::models::{Employee, EmployeePatch, NewEmployee};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Employee gateway backed by a shared connection pool
#[derive(Clone)]
pub struct PgEmployeeGateway {
    pool: PgPool,
}

impl PgEmployeeGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool capped at `max_connections` and wrap it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let gateway = PgEmployeeGateway::connect("postgres://localhost/company", 5).await?;
    /// ```
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the employee table if missing.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        migrations::run(&self.pool).await
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl EmployeeGateway for PgEmployeeGateway {
    async fn list(&self) -> Result<Vec<Employee>, GatewayError> {
        let rows = sqlx::query_as::<_, Employee>("SELECT id, name, salary FROM employee ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: &str) -> Result<Vec<Employee>, GatewayError> {
        let Some(key) = parse_key(id) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, Employee>(
            "SELECT id, name, salary FROM employee WHERE id = $1",
        )
        .bind(key)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i64, GatewayError> {
        let columns = employee.columns()?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO employee (name, salary) VALUES ($1, $2) RETURNING id",
        )
        .bind(columns.name)
        .bind(columns.salary)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: &str, patch: &EmployeePatch) -> Result<u64, GatewayError> {
        let columns = patch.columns()?;
        let Some(key) = parse_key(id) else {
            return Ok(0);
        };

        let result = sqlx::query(
            r#"
            UPDATE employee
            SET name = COALESCE($1, name),
                salary = COALESCE($2, salary)
            WHERE id = $3
            "#,
        )
        .bind(columns.name)
        .bind(columns.salary)
        .bind(key)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, GatewayError> {
        let Some(key) = parse_key(id) else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<i64, GatewayError> {
        let (result,): (i32,) = sqlx::query_as("SELECT 1 + 1 AS result")
            .fetch_one(&self.pool)
            .await?;
        Ok(i64::from(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Salary;
    use serde_json::json;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p employees-server -- --ignored

    async fn gateway() -> PgEmployeeGateway {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let gateway = PgEmployeeGateway::connect(&url, DEFAULT_MAX_CONNECTIONS)
            .await
            .expect("pool creation failed");
        gateway.migrate().await.expect("migrations failed");
        gateway
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_evaluates_in_database() {
        let gateway = gateway().await;
        assert_eq!(gateway.ping().await.unwrap(), 2);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_coalesces_missing_fields() {
        let gateway = gateway().await;
        let id = gateway
            .insert(&NewEmployee {
                name: Some(json!("Coalesce")),
                salary: Some(json!(100)),
            })
            .await
            .unwrap();
        let key = id.to_string();

        let patch = EmployeePatch {
            name: None,
            salary: Some(json!(200.5)),
        };
        assert_eq!(gateway.update(&key, &patch).await.unwrap(), 1);

        let rows = gateway.find(&key).await.unwrap();
        assert_eq!(rows[0].name.as_deref(), Some("Coalesce"));
        assert_eq!(rows[0].salary, Some(Salary(200.5)));

        assert_eq!(gateway.delete(&key).await.unwrap(), 1);
        assert!(gateway.find(&key).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_inserts_get_distinct_ids() {
        let gateway = gateway().await;

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let gateway = gateway.clone();
                tokio::spawn(async move {
                    let id = gateway
                        .insert(&NewEmployee {
                            name: Some(json!(format!("worker-{i}"))),
                            salary: Some(json!(i)),
                        })
                        .await
                        .expect("concurrent insert failed");
                    let rows = gateway.find(&id.to_string()).await.expect("find failed");
                    (id, rows)
                })
            })
            .collect();

        let mut ids = Vec::new();
        for (i, handle) in handles.into_iter().enumerate() {
            let (id, rows) = handle.await.expect("task panicked");
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].name.as_deref(), Some(format!("worker-{i}").as_str()));
            assert_eq!(rows[0].salary, Some(Salary(i as f64)));
            ids.push(id);
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);

        for id in ids {
            gateway.delete(&id.to_string()).await.unwrap();
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unstorable_value_is_rejected_before_sql() {
        let gateway = gateway().await;
        let patch = EmployeePatch {
            name: None,
            salary: Some(json!("lots")),
        };
        assert!(matches!(
            gateway.update("1", &patch).await,
            Err(GatewayError::InvalidValue(_))
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn non_numeric_id_touches_nothing() {
        let gateway = gateway().await;
        assert!(gateway.find("abc").await.unwrap().is_empty());
        assert_eq!(gateway.delete("abc").await.unwrap(), 0);
    }
}
