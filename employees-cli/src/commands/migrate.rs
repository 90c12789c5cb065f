//! Create the employee table and exit

use anyhow::{Context, Result};
use clap::Parser;

use employees_server::db::{PgEmployeeGateway, DEFAULT_MAX_CONNECTIONS};

use super::require_database_url;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;

    let gateway = PgEmployeeGateway::connect(&database_url, DEFAULT_MAX_CONNECTIONS)
        .await
        .context("Failed to create database pool")?;

    gateway.migrate().await.context("Failed to run migrations")?;

    gateway.close().await;
    Ok(())
}
