pub mod render;
pub mod views;
pub mod vm;

pub use render::{
    RenderError, STYLESHEET, render_add_form, render_done, render_home, render_question,
    render_result,
};
pub use vm::{AnswerVm, QuestionVm, SessionSummaryVm};
