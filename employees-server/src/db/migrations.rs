//! Schema migration for the employee table

use sqlx::PgPool;

/// Create the `employee` table if it does not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running employee migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employee (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(45) DEFAULT NULL,
            salary DOUBLE PRECISION DEFAULT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Employee migrations complete");
    Ok(())
}
