use quiz_core::model::QuizSession;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
}

impl SessionProgress {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        Self {
            total: session.total(),
            answered: session.position(),
        }
    }

    /// 1-based number of the question currently on screen.
    #[must_use]
    pub fn current_number(&self) -> usize {
        self.answered + 1
    }
}
