#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{CatalogError, SessionError};
pub use sessions::{
    AnswerOutcome, CurrentQuestion, ResolvedSession, SessionLifecycle, SessionProgress,
};
