use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Form` whose rejection is an [`AppError`], so a body that does not
/// decode gets the same 400 error fragment as a failed validation.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);
