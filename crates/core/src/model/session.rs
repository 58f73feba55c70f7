use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStepError {
    #[error("position {position} is past the last question ({total})")]
    OutOfRange { position: usize, total: usize },

    #[error("question order is not a permutation of 0..{len}")]
    NotAPermutation { len: usize },
}

/// Where a session is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingQuestion,
    Completed,
}

/// Result of recording one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// 1-based number of the question that was just answered.
    pub answered: usize,
    /// Cursor after the step.
    pub position: usize,
    pub total: usize,
    pub has_next: bool,
}

/// Final score of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub correct: usize,
    pub total: usize,
}

/// One player's run through a shuffled catalog.
///
/// `order` holds catalog indices and is fixed at creation, so questions
/// appended later never show up in a run that already started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    order: Vec<usize>,
    position: usize,
    correct: usize,
    started_at: DateTime<Utc>,
    last_active_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a run over the given catalog order.
    ///
    /// # Errors
    ///
    /// Returns `SessionStepError::NotAPermutation` unless `order` contains each
    /// index in `0..order.len()` exactly once.
    pub fn new(order: Vec<usize>, started_at: DateTime<Utc>) -> Result<Self, SessionStepError> {
        let len = order.len();
        let mut seen = vec![false; len];
        for &index in &order {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(SessionStepError::NotAPermutation { len }),
            }
        }

        Ok(Self {
            order,
            position: 0,
            correct: 0,
            started_at,
            last_active_at: started_at,
        })
    }

    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn last_active_at(&self) -> DateTime<Utc> {
        self.last_active_at
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.position < self.order.len() {
            SessionState::AwaitingQuestion
        } else {
            SessionState::Completed
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Completed
    }

    /// Catalog index of the next unanswered question.
    ///
    /// # Errors
    ///
    /// Returns `SessionStepError::OutOfRange` once every question was answered.
    pub fn current_index(&self) -> Result<usize, SessionStepError> {
        self.order
            .get(self.position)
            .copied()
            .ok_or(SessionStepError::OutOfRange {
                position: self.position,
                total: self.order.len(),
            })
    }

    /// Score the current question and move the cursor forward.
    ///
    /// # Errors
    ///
    /// Returns `SessionStepError::OutOfRange` if the session is already complete.
    pub fn record_answer(
        &mut self,
        is_correct: bool,
        at: DateTime<Utc>,
    ) -> Result<StepOutcome, SessionStepError> {
        self.current_index()?;

        if is_correct {
            self.correct += 1;
        }
        self.position += 1;
        self.last_active_at = at;

        Ok(StepOutcome {
            answered: self.position,
            position: self.position,
            total: self.order.len(),
            has_next: self.position < self.order.len(),
        })
    }

    pub fn touch(&mut self, at: DateTime<Utc>) {
        if at > self.last_active_at {
            self.last_active_at = at;
        }
    }

    /// True when nothing happened in this session for longer than `max_idle`.
    #[must_use]
    pub fn is_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> bool {
        now - self.last_active_at > max_idle
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            correct: self.correct,
            total: self.order.len(),
        }
    }
}
