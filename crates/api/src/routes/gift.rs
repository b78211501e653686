//! Route definitions for the gift registry of one party.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::gift;
use crate::state::AppState;

/// Routes mounted at `/party/{party_id}/gifts`.
///
/// ```text
/// GET    /                      -> registry_page
/// POST   /                      -> create
/// GET    /{gift_id}             -> detail
/// GET    /{gift_id}/edit        -> edit_form
/// PUT    /{gift_id}/edit        -> update
/// DELETE /{gift_id}/delete      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gift::registry_page).post(gift::create))
        .route("/{gift_id}", get(gift::detail))
        .route("/{gift_id}/edit", get(gift::edit_form).put(gift::update))
        .route("/{gift_id}/delete", delete(gift::delete))
}
