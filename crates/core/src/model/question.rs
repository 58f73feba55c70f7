use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::text::{AnswerText, PromptText};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Raw question input as submitted by the authoring form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub answer: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Trim both fields and reject the draft if either ends up empty.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyAnswer`.
    pub fn validate(self) -> Result<ValidatedQuestion, QuestionError> {
        let prompt = PromptText::parse(&self.prompt).map_err(|_| QuestionError::EmptyPrompt)?;
        let answer = AnswerText::parse(&self.answer).map_err(|_| QuestionError::EmptyAnswer)?;
        Ok(ValidatedQuestion { prompt, answer })
    }
}

/// A question that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    pub prompt: PromptText,
    pub answer: AnswerText,
}

impl ValidatedQuestion {
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            prompt: self.prompt,
            answer: self.answer,
        }
    }
}

/// A published catalog entry. Never changes once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: PromptText,
    answer: AnswerText,
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text must not be empty")]
    EmptyPrompt,

    #[error("answer must not be empty")]
    EmptyAnswer,
}

//
// ─── QUESTION IMPLEMENTATION ───────────────────────────────────────────────────
//

impl Question {
    /// Build a question directly from raw text, e.g. for seed data.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if either field is empty after trimming.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        Ok(QuestionDraft::new(prompt, answer).validate()?.assign_id(id))
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    /// Exact comparison after trimming the candidate. No case or width folding.
    #[must_use]
    pub fn is_answered_by(&self, candidate: &str) -> bool {
        candidate.trim() == self.answer.as_str()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
