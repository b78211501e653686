/// Handed to every handler through `State<AppState>`; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: party_db::DbPool,
}
