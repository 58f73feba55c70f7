use quiz_core::model::{Question, QuestionId, ValidatedQuestion};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::seed::default_questions;
use crate::sessions::SessionStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("lock poisoned: {0}")]
    Poisoned(String),
}

/// Append-only question catalog.
///
/// Entries are addressed by their catalog position, which never changes
/// because nothing is ever removed.
pub trait QuestionRepository: Send + Sync {
    /// All questions in append order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Number of questions currently in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn count_questions(&self) -> Result<usize, StorageError>;

    /// Question at the given catalog position, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn question_at(&self, index: usize) -> Result<Option<Question>, StorageError>;

    /// Assign the next id (max existing id + 1) and append.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be written.
    fn append_question(&self, question: ValidatedQuestion) -> Result<Question, StorageError>;
}

/// In-memory catalog guarded by a reader/writer lock.
#[derive(Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Question>>, StorageError> {
        self.questions
            .read()
            .map_err(|e| StorageError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Question>>, StorageError> {
        self.questions
            .write()
            .map_err(|e| StorageError::Poisoned(e.to_string()))
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.read()?.clone())
    }

    fn count_questions(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.len())
    }

    fn question_at(&self, index: usize) -> Result<Option<Question>, StorageError> {
        Ok(self.read()?.get(index).cloned())
    }

    fn append_question(&self, question: ValidatedQuestion) -> Result<Question, StorageError> {
        let mut guard = self.write()?;
        let max_id = guard
            .iter()
            .map(Question::id)
            .max()
            .unwrap_or(QuestionId::new(0));
        let question = question.assign_id(max_id.next());
        guard.push(question.clone());
        Ok(question)
    }
}

/// Aggregates the catalog and the session store for the services layer.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub sessions: Arc<SessionStore>,
}

impl Storage {
    /// Empty catalog, empty session store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_questions(Vec::new())
    }

    /// Catalog pre-filled with the built-in questions.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_questions(default_questions())
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let questions: Arc<dyn QuestionRepository> =
            Arc::new(InMemoryQuestionRepository::with_questions(questions));
        Self {
            questions,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}
