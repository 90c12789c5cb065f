//! employees-server: HTTP CRUD over the `employee` table
//!
//! Routes HTTP verbs to parameterized SQL through a single injected
//! [`EmployeeGateway`], plus a `/ping` health check.

pub mod db;
pub mod http;
pub mod models;

pub use db::{EmployeeGateway, GatewayError, InMemoryGateway, PgEmployeeGateway};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{Employee, EmployeePatch, NewEmployee};
