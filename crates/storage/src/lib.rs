#![forbid(unsafe_code)]

pub mod repository;
pub mod seed;
pub mod sessions;

pub use repository::{InMemoryQuestionRepository, QuestionRepository, Storage, StorageError};
pub use sessions::{SessionStore, generate_session_id};
