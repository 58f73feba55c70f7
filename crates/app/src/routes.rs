//! HTTP surface: one handler per page, all state in `AppServices`.

use axum::Router;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use services::{AppServices, SessionError};
use tower_http::trace::TraceLayer;
use tracing::debug;
use ui::{AnswerVm, QuestionVm, SessionSummaryVm, STYLESHEET};

use crate::cookies::{forget_session, session_cookie, session_id};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct NewQuestionForm {
    #[serde(rename = "questionText", default)]
    pub question_text: String,
    #[serde(default)]
    pub answer: String,
}

/// Build the application router over shared services.
pub fn router(services: AppServices) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/start", get(start))
        .route("/submit", get(submit_redirect).post(submit))
        .route("/done", get(done))
        .route("/add", get(add_form))
        .route("/add/submit", get(add_redirect).post(add_question))
        .route("/style.css", get(stylesheet))
        .fallback(index)
        .layer(TraceLayer::new_for_http())
        .with_state(services)
}

async fn index(State(services): State<AppServices>) -> Result<Html<String>, AppError> {
    let count = services.catalog().count()?;
    Ok(Html(ui::render_home(count)?))
}

async fn start(State(services): State<AppServices>, jar: CookieJar) -> Result<Response, AppError> {
    let cookie = session_id(&jar);
    let resolved = services.sessions().resolve_or_create(cookie.as_ref())?;
    let jar = if resolved.is_new {
        jar.add(session_cookie(&resolved.id))
    } else {
        jar
    };

    if resolved.session.is_complete() {
        return Ok((jar, Redirect::to("/done")).into_response());
    }

    match services.sessions().current_question(&resolved.id) {
        Ok(current) => {
            let html = ui::render_question(QuestionVm::from(&current))?;
            Ok((jar, Html(html)).into_response())
        }
        Err(SessionError::OutOfRange { .. }) => Ok((jar, Redirect::to("/done")).into_response()),
        Err(err) => Err(err.into()),
    }
}

async fn submit(
    State(services): State<AppServices>,
    jar: CookieJar,
    form: Result<Form<AnswerForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let id = session_id(&jar).ok_or(SessionError::Missing)?;
    // An unreadable body grades as an empty answer.
    let answer = form.map(|Form(form)| form.answer).unwrap_or_default();
    let outcome = services.sessions().submit_answer(&id, &answer)?;
    debug!(
        session = %id,
        correct = outcome.is_correct,
        position = outcome.new_position,
        "answer graded"
    );
    Ok(Html(ui::render_result(AnswerVm::from(&outcome))?))
}

async fn submit_redirect() -> Redirect {
    Redirect::to("/start")
}

async fn done(State(services): State<AppServices>, jar: CookieJar) -> Result<Response, AppError> {
    let id = session_id(&jar).ok_or(SessionError::Missing)?;
    let summary = services.sessions().finalize(&id)?;
    let html = ui::render_done(SessionSummaryVm::from(&summary))?;
    Ok((forget_session(jar), Html(html)).into_response())
}

async fn add_form() -> Result<Html<String>, AppError> {
    Ok(Html(ui::render_add_form()?))
}

async fn add_question(
    State(services): State<AppServices>,
    Form(form): Form<NewQuestionForm>,
) -> Result<Redirect, AppError> {
    services
        .catalog()
        .append(form.question_text, form.answer)?;
    Ok(Redirect::to("/"))
}

async fn add_redirect() -> Redirect {
    Redirect::to("/add")
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}
