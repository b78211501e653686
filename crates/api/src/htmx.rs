//! Request-side htmx support.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header htmx adds to every request it issues.
pub const HX_REQUEST: &str = "hx-request";

/// Whether the request came from htmx, in which case handlers answer with a
/// fragment instead of a full page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for HxRequest {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(HxRequest(parts.headers.contains_key(HX_REQUEST)))
    }
}
