mod lifecycle;
mod plan;
mod progress;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use lifecycle::{AnswerOutcome, CurrentQuestion, ResolvedSession, SessionLifecycle};
pub use plan::shuffled_order;
pub use progress::SessionProgress;
