use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use quiz_core::model::{Question, QuizSession, SessionId, SessionState, SessionSummary};
use storage::{QuestionRepository, SessionStore};
use tracing::{debug, info};

use super::plan::shuffled_order;
use super::progress::SessionProgress;
use crate::Clock;
use crate::error::SessionError;

//
// ─── RESULT TYPES ──────────────────────────────────────────────────────────────
//

/// Session found (or started) for an incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    pub id: SessionId,
    pub session: QuizSession,
    /// The caller must hand the new id to the client.
    pub is_new: bool,
}

/// The question a session is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentQuestion {
    pub question: Question,
    pub progress: SessionProgress,
}

/// Outcome of grading one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
    pub your_answer: String,
    /// Progress after the answer was recorded.
    pub progress: SessionProgress,
    pub new_position: usize,
    pub has_next: bool,
}

//
// ─── LIFECYCLE ─────────────────────────────────────────────────────────────────
//

/// Drives sessions from creation through grading to the final score.
///
/// State lives in the shared `SessionStore`; every read-modify-write happens
/// inside a single `SessionStore::with_session` call.
#[derive(Clone)]
pub struct SessionLifecycle {
    clock: Clock,
    questions: Arc<dyn QuestionRepository>,
    sessions: Arc<SessionStore>,
    idle_timeout: Option<Duration>,
}

impl SessionLifecycle {
    #[must_use]
    pub fn new(
        clock: Clock,
        questions: Arc<dyn QuestionRepository>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            clock,
            questions,
            sessions,
            idle_timeout: None,
        }
    }

    /// Expire sessions idle for longer than `timeout`, checked lazily whenever
    /// a new session is created. `None` keeps sessions until they finish.
    #[must_use]
    pub fn with_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Start a fresh session over the current catalog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the catalog or store is unusable.
    pub fn start(&self) -> Result<ResolvedSession, SessionError> {
        let now = self.clock.now();
        if let Some(max_idle) = self.idle_timeout {
            let swept = self.sessions.sweep_idle(now, max_idle)?;
            if swept > 0 {
                debug!(swept, "expired idle sessions");
            }
        }

        let total = self.questions.count_questions()?;
        let session = QuizSession::new(shuffled_order(total), now)?;
        let id = self.sessions.create(session.clone())?;
        info!(session = %id, total, "session started");

        Ok(ResolvedSession {
            id,
            session,
            is_new: true,
        })
    }

    /// Look up the session named by the request cookie, or start a new one.
    ///
    /// A session idle past the configured timeout is dropped and replaced.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the catalog or store is unusable.
    pub fn resolve_or_create(
        &self,
        cookie: Option<&SessionId>,
    ) -> Result<ResolvedSession, SessionError> {
        let Some(id) = cookie else {
            return self.start();
        };

        let now = self.clock.now();
        self.expire_if_idle(id, now)?;
        let existing = self.sessions.with_session(id, |session| {
            session.touch(now);
            session.clone()
        })?;

        match existing {
            Some(session) => Ok(ResolvedSession {
                id: id.clone(),
                session,
                is_new: false,
            }),
            None => {
                debug!(session = %id, "unknown session cookie");
                self.start()
            }
        }
    }

    fn expire_if_idle(&self, id: &SessionId, now: DateTime<Utc>) -> Result<(), SessionError> {
        let Some(max_idle) = self.idle_timeout else {
            return Ok(());
        };
        if self
            .sessions
            .remove_if(id, |session| session.is_idle(now, max_idle))?
            .is_some()
        {
            debug!(session = %id, "expired idle session");
        }
        Ok(())
    }

    /// Snapshot of a live session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Missing` if no session has this id.
    pub fn get(&self, id: &SessionId) -> Result<QuizSession, SessionError> {
        self.expire_if_idle(id, self.clock.now())?;
        self.sessions.get(id)?.ok_or(SessionError::Missing)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Missing` if no session has this id.
    pub fn state(&self, id: &SessionId) -> Result<SessionState, SessionError> {
        Ok(self.get(id)?.state())
    }

    /// The question the session is waiting on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Missing` if no session has this id.
    /// Returns `SessionError::OutOfRange` once every question was answered.
    pub fn current_question(&self, id: &SessionId) -> Result<CurrentQuestion, SessionError> {
        let session = self.get(id)?;
        let index = session.current_index()?;
        let question = self
            .questions
            .question_at(index)?
            .ok_or(SessionError::QuestionMissing { index })?;

        Ok(CurrentQuestion {
            question,
            progress: SessionProgress::of(&session),
        })
    }

    /// Grade `raw_answer` against the current question and advance.
    ///
    /// The answer is trimmed and compared for exact equality. Two submissions
    /// racing on one session are serialized and both count.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Missing` if no session has this id.
    /// Returns `SessionError::OutOfRange` if the session is already complete.
    pub fn submit_answer(
        &self,
        id: &SessionId,
        raw_answer: &str,
    ) -> Result<AnswerOutcome, SessionError> {
        let now = self.clock.now();
        let your_answer = raw_answer.trim();
        self.expire_if_idle(id, now)?;

        let outcome = self.sessions.with_session(id, |session| -> Result<_, SessionError> {
            let index = session.current_index()?;
            let question = self
                .questions
                .question_at(index)?
                .ok_or(SessionError::QuestionMissing { index })?;
            let is_correct = question.is_answered_by(your_answer);
            let step = session.record_answer(is_correct, now)?;

            Ok(AnswerOutcome {
                is_correct,
                correct_answer: question.answer().to_owned(),
                your_answer: your_answer.to_owned(),
                progress: SessionProgress::of(session),
                new_position: step.position,
                has_next: step.has_next,
            })
        })?;

        let outcome = outcome.ok_or(SessionError::Missing)??;
        debug!(
            session = %id,
            correct = outcome.is_correct,
            position = outcome.new_position,
            "answer recorded"
        );
        Ok(outcome)
    }

    /// Report the score and forget the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Missing` if no session has this id, including
    /// when it was already finalized.
    pub fn finalize(&self, id: &SessionId) -> Result<SessionSummary, SessionError> {
        self.expire_if_idle(id, self.clock.now())?;
        let session = self.sessions.remove(id)?.ok_or(SessionError::Missing)?;
        let summary = session.summary();
        info!(
            session = %id,
            correct = summary.correct,
            total = summary.total,
            "session finished"
        );
        Ok(summary)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
