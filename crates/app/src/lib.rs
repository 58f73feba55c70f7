#![forbid(unsafe_code)]

pub mod config;
pub mod cookies;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use config::{ArgsError, Config, Invocation};
pub use error::AppError;
pub use routes::router;
