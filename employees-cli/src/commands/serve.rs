//! HTTP server command
//!
//! Builds the single gateway for the process (Postgres pool, or in-memory
//! with `--in-memory`) and runs the employees API until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use employees_server::db::DEFAULT_MAX_CONNECTIONS;
use employees_server::{run_server, EmployeeGateway, InMemoryGateway, PgEmployeeGateway, ServerConfig};

use super::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep employees in process memory instead of a database (ignores --database-url)
    #[arg(long)]
    pub in_memory: bool,

    /// Do not create the employee table on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let gateway: Arc<dyn EmployeeGateway> = if args.in_memory {
        tracing::warn!("Serving from memory - data is lost on shutdown");
        Arc::new(InMemoryGateway::new())
    } else {
        let database_url = require_database_url(args.database_url)?;

        let gateway = PgEmployeeGateway::connect(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        if args.skip_migrations {
            tracing::info!("Skipping migrations");
        } else {
            gateway
                .migrate()
                .await
                .context("Failed to run migrations")?;
        }

        Arc::new(gateway)
    };

    tracing::info!("Starting employees server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(gateway, config).await.context("Server error")?;

    Ok(())
}
