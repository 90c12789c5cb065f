//! Database layer - gateway trait, implementations and migrations
//!
//! Handlers only see [`EmployeeGateway`]. The process builds exactly one
//! gateway at startup and shares it through `AppState`.

pub mod gateway;
pub mod memory;
pub mod migrations;
pub mod postgres;

pub use gateway::{EmployeeGateway, GatewayError};
pub use memory::InMemoryGateway;
pub use postgres::{PgEmployeeGateway, DEFAULT_MAX_CONNECTIONS};
