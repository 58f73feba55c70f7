use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use services::{CatalogError, SessionError};
use thiserror::Error;
use tracing::error;
use ui::RenderError;

const BAD_INPUT: &str = "入力が不正です";
const RENDER_FAILED: &str = "テンプレート表示エラー";
const INTERNAL: &str = "内部エラーが発生しました";

/// Everything a handler can fail with, resolved at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Catalog(CatalogError::Invalid(_)) => {
                (StatusCode::BAD_REQUEST, BAD_INPUT).into_response()
            }
            AppError::Session(SessionError::Missing) => Redirect::to("/").into_response(),
            AppError::Session(SessionError::OutOfRange { .. }) => {
                Redirect::to("/done").into_response()
            }
            AppError::Render(err) => {
                error!(%err, "page render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILED).into_response()
            }
            other => {
                error!(err = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL).into_response()
            }
        }
    }
}
