//! Server-side rendering of the views into complete HTML documents.

use dioxus::prelude::*;
use dioxus_ssr::Renderer;
use thiserror::Error;

use crate::views::{
    AddQuestionView, DoneProps, DoneView, HomeProps, HomeView, QuestionProps, QuestionView,
    ResultProps, ResultView,
};
use crate::vm::{AnswerVm, QuestionVm, SessionSummaryVm};

/// Stylesheet served at `/style.css`.
pub const STYLESHEET: &str = include_str!("../assets/style.css");

const DOCTYPE: &str = "<!DOCTYPE html>\n";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    #[error("failed to write page markup")]
    Format(#[from] std::fmt::Error),
}

fn render_dom(mut dom: VirtualDom) -> Result<String, RenderError> {
    dom.rebuild_in_place();
    let mut html = String::from(DOCTYPE);
    Renderer::new().render_to(&mut html, &dom)?;
    Ok(html)
}

/// # Errors
///
/// Returns `RenderError` if the markup cannot be written.
pub fn render_home(question_count: usize) -> Result<String, RenderError> {
    render_dom(VirtualDom::new_with_props(
        HomeView,
        HomeProps { question_count },
    ))
}

/// # Errors
///
/// Returns `RenderError` if the markup cannot be written.
pub fn render_question(vm: QuestionVm) -> Result<String, RenderError> {
    render_dom(VirtualDom::new_with_props(QuestionView, QuestionProps { vm }))
}

/// # Errors
///
/// Returns `RenderError` if the markup cannot be written.
pub fn render_result(vm: AnswerVm) -> Result<String, RenderError> {
    render_dom(VirtualDom::new_with_props(ResultView, ResultProps { vm }))
}

/// # Errors
///
/// Returns `RenderError` if the markup cannot be written.
pub fn render_done(summary: SessionSummaryVm) -> Result<String, RenderError> {
    render_dom(VirtualDom::new_with_props(DoneView, DoneProps { summary }))
}

/// # Errors
///
/// Returns `RenderError` if the markup cannot be written.
pub fn render_add_form() -> Result<String, RenderError> {
    render_dom(VirtualDom::new(AddQuestionView))
}
