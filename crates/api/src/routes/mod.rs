pub mod gift;
pub mod guest;
pub mod health;
pub mod party;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                               upcoming parties (?page=N)
///
/// /party/new                                      new-party form, create
/// /party/new/validate_date                        inline date warning
/// /party/new/validate_invitation                  inline invitation warning
/// /party/{party_id}                               party detail
///
/// /party/{party_id}/gifts                         registry, add gift
/// /party/{party_id}/gifts/{gift_id}               gift detail
/// /party/{party_id}/gifts/{gift_id}/edit          edit form, update
/// /party/{party_id}/gifts/{gift_id}/delete        remove gift
///
/// /party/{party_id}/guests                        guest list, invite
/// /party/{party_id}/guests/mark-attending         bulk mark attending
/// /party/{party_id}/guests/mark-not-attending     bulk mark not attending
/// /party/{party_id}/guests/filter                 filtered guest list
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::party::list))
        // Party routes (also nests gifts and guests).
        .nest("/party", party::router())
}
