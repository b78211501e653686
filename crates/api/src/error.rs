use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use party_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Renders as an HTML error fragment that htmx can swap into the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::from(errors))
    }
}

impl From<FormRejection> for AppError {
    /// A body that does not decode (missing field, `price=abc`) is the
    /// client's mistake, reported like any other bad input.
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Category of a failed request, carried in the fragment's `data-code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    BadRequest,
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Message shown in place of anything internal.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// The error's category and the text safe to show the user. Internal
    /// causes are logged by [`classify_sqlx_error`] and replaced by a
    /// generic message.
    pub fn classify(&self) -> (ErrorKind, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                ErrorKind::NotFound,
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => (ErrorKind::Validation, msg.clone()),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (ErrorKind::BadRequest, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (kind, message) = self.classify();
        let body = views::error_fragment(kind.code(), &message);
        (kind.status_code(), Html(body)).into_response()
    }
}

/// `RowNotFound` is a 404. A foreign key violation (23503) means the party a
/// gift or guest was added to does not exist. Anything else is internal.
fn classify_sqlx_error(err: &sqlx::Error) -> (ErrorKind, String) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => (
            ErrorKind::BadRequest,
            "Referenced party does not exist".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (ErrorKind::Internal, INTERNAL_MESSAGE.to_string())
        }
    }
}
