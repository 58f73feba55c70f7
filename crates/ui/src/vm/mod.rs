mod session_summary_vm;
mod session_vm;

pub use session_summary_vm::SessionSummaryVm;
pub use session_vm::{AnswerVm, QuestionVm};
