//! Route definitions for the guest list of one party.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::guest;
use crate::state::AppState;

/// Routes mounted at `/party/{party_id}/guests`.
///
/// ```text
/// GET    /                      -> list_page
/// POST   /                      -> create
/// PUT    /mark-attending        -> mark_attending
/// PUT    /mark-not-attending    -> mark_not_attending
/// POST   /filter                -> filter
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guest::list_page).post(guest::create))
        .route("/mark-attending", put(guest::mark_attending))
        .route("/mark-not-attending", put(guest::mark_not_attending))
        .route("/filter", post(guest::filter))
}
