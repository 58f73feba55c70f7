use std::sync::Arc;

use quiz_core::model::{Question, QuestionDraft};
use storage::QuestionRepository;
use tracing::info;

use crate::error::CatalogError;

/// Reads and grows the question catalog.
#[derive(Clone)]
pub struct CatalogService {
    questions: Arc<dyn QuestionRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// All questions in append order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub fn list(&self) -> Result<Vec<Question>, CatalogError> {
        Ok(self.questions.list_questions()?)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub fn count(&self) -> Result<usize, CatalogError> {
        Ok(self.questions.count_questions()?)
    }

    /// Question at catalog position `index`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub fn get(&self, index: usize) -> Result<Option<Question>, CatalogError> {
        Ok(self.questions.question_at(index)?)
    }

    /// Validate and append a new question.
    ///
    /// Sessions that already started keep their own question order, so the
    /// new entry only shows up in sessions created afterwards.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` if either field is empty after trimming;
    /// the catalog is left untouched in that case.
    /// Returns `CatalogError::Storage` if repository access fails.
    pub fn append(
        &self,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Question, CatalogError> {
        let validated = QuestionDraft::new(prompt, answer).validate()?;
        let question = self.questions.append_question(validated)?;
        info!(id = %question.id(), "question added");
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionError, QuestionId};
    use storage::InMemoryQuestionRepository;
    use storage::seed::default_questions;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryQuestionRepository::with_questions(
            default_questions(),
        )))
    }

    #[test]
    fn append_trims_and_assigns_next_id() {
        let catalog = service();
        let added = catalog.append("  獺祭 ", " だっさい ").unwrap();

        assert_eq!(added.id(), QuestionId::new(15));
        assert_eq!(added.prompt(), "獺祭");
        assert_eq!(added.answer(), "だっさい");
        assert_eq!(catalog.count().unwrap(), 15);
        assert_eq!(catalog.list().unwrap().last(), Some(&added));
    }

    #[test]
    fn get_addresses_catalog_positions() {
        let catalog = service();
        assert_eq!(catalog.get(0).unwrap().unwrap().prompt(), "晴耕雨讀");
        assert_eq!(catalog.get(13).unwrap().unwrap().answer(), "なべしま");
        assert!(catalog.get(14).unwrap().is_none());
    }

    #[test]
    fn empty_fields_are_rejected_without_mutation() {
        let catalog = service();

        let err = catalog.append("   ", "だっさい").unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(QuestionError::EmptyPrompt)));

        let err = catalog.append("獺祭", "\t").unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(QuestionError::EmptyAnswer)));

        assert_eq!(catalog.count().unwrap(), 14);
    }
}
