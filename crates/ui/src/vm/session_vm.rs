use services::{AnswerOutcome, CurrentQuestion};

/// What the question page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    /// 1-based.
    pub number: usize,
    pub total: usize,
}

impl From<&CurrentQuestion> for QuestionVm {
    fn from(current: &CurrentQuestion) -> Self {
        Self {
            prompt: current.question.prompt().to_owned(),
            number: current.progress.current_number(),
            total: current.progress.total,
        }
    }
}

/// What the result page shows after an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerVm {
    pub is_correct: bool,
    pub correct_answer: String,
    pub your_answer: String,
    /// 1-based number of the question just answered.
    pub number: usize,
    pub total: usize,
    pub has_next: bool,
}

impl From<&AnswerOutcome> for AnswerVm {
    fn from(outcome: &AnswerOutcome) -> Self {
        Self {
            is_correct: outcome.is_correct,
            correct_answer: outcome.correct_answer.clone(),
            your_answer: outcome.your_answer.clone(),
            number: outcome.progress.answered,
            total: outcome.progress.total,
            has_next: outcome.has_next,
        }
    }
}
