//! Handlers for the `/party/{party_id}/guests` resource.

use axum::extract::{Path, State};
use axum::response::Html;
use party_core::guest_filter::GuestFilter;
use party_core::types::DbId;
use party_db::models::guest::CreateGuest;
use party_db::repositories::GuestRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppForm;
use crate::state::AppState;
use crate::views;

/// Form field carrying the ids selected for a bulk attendance change.
const GUEST_IDS_FIELD: &str = "guest_ids";

/// Body of `POST /party/{party_id}/guests/filter`.
///
/// Missing fields behave like an empty search and an unknown selector.
#[derive(Debug, Deserialize)]
pub struct FilterGuests {
    #[serde(default)]
    pub guest_search: String,
    #[serde(default)]
    pub attending_filter: String,
}

/// Collect every `guest_ids` value from a urlencoded body. The field repeats
/// once per checked box, which a struct-shaped `Form` cannot express.
pub fn parse_guest_ids(fields: &[(String, String)]) -> AppResult<Vec<DbId>> {
    fields
        .iter()
        .filter(|(key, _)| key == GUEST_IDS_FIELD)
        .map(|(_, value)| {
            value
                .parse::<DbId>()
                .map_err(|_| AppError::BadRequest(format!("Invalid guest id: {value}")))
        })
        .collect()
}

/// Apply a bulk attendance change, then return the refreshed filter and list.
async fn set_attending(
    state: &AppState,
    party_id: DbId,
    fields: &[(String, String)],
    attending: bool,
) -> AppResult<Html<String>> {
    let ids = parse_guest_ids(fields)?;
    let updated = GuestRepo::set_attending(&state.pool, &ids, attending).await?;
    tracing::info!(
        %party_id,
        requested = ids.len(),
        updated,
        attending,
        "Bulk attendance update"
    );

    let guests = GuestRepo::list_by_party(&state.pool, party_id).await?;
    Ok(Html(views::guest::guest_filter_and_list_partial(
        party_id, &guests,
    )))
}

// ---------------------------------------------------------------------------
// GET /party/{party_id}/guests
// ---------------------------------------------------------------------------

pub async fn list_page(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Html<String>> {
    let guests = GuestRepo::list_by_party(&state.pool, party_id).await?;
    tracing::debug!(%party_id, count = guests.len(), "Listed guests");
    Ok(Html(views::guest::guest_list_page(party_id, &guests)))
}

// ---------------------------------------------------------------------------
// POST /party/{party_id}/guests
// ---------------------------------------------------------------------------

pub async fn create(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    AppForm(input): AppForm<CreateGuest>,
) -> AppResult<Html<String>> {
    input.validate()?;

    let guest = GuestRepo::create(&state.pool, party_id, &input).await?;
    tracing::info!(id = %guest.id, %party_id, name = %guest.name, "Guest invited");

    let guests = GuestRepo::list_by_party(&state.pool, party_id).await?;
    Ok(Html(views::guest::guest_filter_and_list_partial(
        party_id, &guests,
    )))
}

// ---------------------------------------------------------------------------
// PUT /party/{party_id}/guests/mark-attending
// ---------------------------------------------------------------------------

pub async fn mark_attending(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    AppForm(fields): AppForm<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    set_attending(&state, party_id, &fields, true).await
}

// ---------------------------------------------------------------------------
// PUT /party/{party_id}/guests/mark-not-attending
// ---------------------------------------------------------------------------

pub async fn mark_not_attending(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    AppForm(fields): AppForm<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    set_attending(&state, party_id, &fields, false).await
}

// ---------------------------------------------------------------------------
// POST /party/{party_id}/guests/filter
// ---------------------------------------------------------------------------

/// Filter the party's guests by attendance and name.
pub async fn filter(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    AppForm(input): AppForm<FilterGuests>,
) -> AppResult<Html<String>> {
    let filter = GuestFilter::from_form(&input.attending_filter, &input.guest_search);
    let guests = GuestRepo::filter(&state.pool, party_id, &filter).await?;
    tracing::debug!(%party_id, ?filter, count = guests.len(), "Filtered guests");
    Ok(Html(views::guest::guest_list_partial(&guests)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn collects_repeated_ids_in_order() {
        let a = uuid::Uuid::new_v4();
        let b = uuid::Uuid::new_v4();
        let fields = vec![
            pair("guest_ids", &a.to_string()),
            pair("other", "x"),
            pair("guest_ids", &b.to_string()),
        ];
        assert_eq!(parse_guest_ids(&fields).unwrap(), vec![a, b]);
    }

    #[test]
    fn no_ids_is_empty() {
        assert!(parse_guest_ids(&[]).unwrap().is_empty());
    }

    #[test]
    fn malformed_id_is_bad_request() {
        let fields = vec![pair("guest_ids", "not-a-uuid")];
        assert_matches!(parse_guest_ids(&fields), Err(AppError::BadRequest(_)));
    }
}
