//! Route definitions for the `/party` resource.
//!
//! Also nests gift and guest routes under `/party/{party_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::party;
use crate::routes::{gift, guest};
use crate::state::AppState;

/// Routes mounted at `/party`.
///
/// ```text
/// GET    /new                          -> new_form
/// POST   /new                          -> create (302 to /party/{id})
/// POST   /new/validate_date            -> validate_date
/// POST   /new/validate_invitation      -> validate_invitation
/// GET    /{party_id}                   -> detail
///
/// /{party_id}/gifts/...                -> see routes::gift
/// /{party_id}/guests/...               -> see routes::guest
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", get(party::new_form).post(party::create))
        .route("/new/validate_date", post(party::validate_date))
        .route("/new/validate_invitation", post(party::validate_invitation))
        .route("/{party_id}", get(party::detail))
        .nest("/{party_id}/gifts", gift::router())
        .nest("/{party_id}/guests", guest::router())
}
