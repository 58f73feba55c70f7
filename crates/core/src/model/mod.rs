mod ids;
mod question;
mod session;
mod text;

pub use ids::{ParseIdError, QuestionId, SessionId};
pub use question::{Question, QuestionDraft, QuestionError, ValidatedQuestion};
pub use session::{QuizSession, SessionState, SessionStepError, SessionSummary, StepOutcome};
pub use text::{AnswerText, PromptText, Text, TextError};
