//! Handlers for the `/party/{party_id}/gifts` resource.
//!
//! Every mutation re-reads the owning party so the returned fragment can
//! show it. Gifts are addressed by their own id; the party in the path is
//! only used for display.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use party_core::error::CoreError;
use party_core::types::DbId;
use party_db::models::gift::{CreateGift, UpdateGift};
use party_db::repositories::{GiftRepo, PartyRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppForm;
use crate::state::AppState;
use crate::views;

fn gift_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Gift",
        id,
    })
}

// ---------------------------------------------------------------------------
// GET /party/{party_id}/gifts
// ---------------------------------------------------------------------------

/// Registry page. An unknown party renders an empty registry.
pub async fn registry_page(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Html<String>> {
    let party = PartyRepo::find_by_id(&state.pool, party_id).await?;
    let gifts = GiftRepo::list_by_party(&state.pool, party_id).await?;
    tracing::debug!(%party_id, count = gifts.len(), "Listed gifts");
    Ok(Html(views::gift::gift_registry_page(
        party_id,
        party.as_ref(),
        &gifts,
    )))
}

// ---------------------------------------------------------------------------
// POST /party/{party_id}/gifts
// ---------------------------------------------------------------------------

pub async fn create(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    AppForm(input): AppForm<CreateGift>,
) -> AppResult<(StatusCode, Html<String>)> {
    input.validate()?;

    let gift = GiftRepo::create(&state.pool, party_id, &input).await?;
    tracing::info!(id = %gift.id, %party_id, name = %gift.gift_name, "Gift created");

    let party = PartyRepo::find_by_id(&state.pool, party_id).await?;
    Ok((
        StatusCode::CREATED,
        Html(views::gift::gift_detail_partial(party.as_ref(), &gift)),
    ))
}

// ---------------------------------------------------------------------------
// GET /party/{party_id}/gifts/{gift_id}
// ---------------------------------------------------------------------------

pub async fn detail(
    State(state): State<AppState>,
    Path((party_id, gift_id)): Path<(DbId, DbId)>,
) -> AppResult<Html<String>> {
    let gift = GiftRepo::find_by_id(&state.pool, gift_id)
        .await?
        .ok_or_else(|| gift_not_found(gift_id))?;
    let party = PartyRepo::find_by_id(&state.pool, party_id).await?;
    Ok(Html(views::gift::gift_detail_partial(party.as_ref(), &gift)))
}

// ---------------------------------------------------------------------------
// GET /party/{party_id}/gifts/{gift_id}/edit
// ---------------------------------------------------------------------------

pub async fn edit_form(
    State(state): State<AppState>,
    Path((party_id, gift_id)): Path<(DbId, DbId)>,
) -> AppResult<Html<String>> {
    let gift = GiftRepo::find_by_id(&state.pool, gift_id)
        .await?
        .ok_or_else(|| gift_not_found(gift_id))?;
    Ok(Html(views::gift::gift_update_partial(party_id, &gift)))
}

// ---------------------------------------------------------------------------
// PUT /party/{party_id}/gifts/{gift_id}/edit
// ---------------------------------------------------------------------------

pub async fn update(
    State(state): State<AppState>,
    Path((party_id, gift_id)): Path<(DbId, DbId)>,
    AppForm(input): AppForm<UpdateGift>,
) -> AppResult<Html<String>> {
    input.validate()?;

    let gift = GiftRepo::update(&state.pool, gift_id, &input)
        .await?
        .ok_or_else(|| gift_not_found(gift_id))?;
    tracing::info!(id = %gift.id, name = %gift.gift_name, price = %gift.price, "Gift updated");

    let party = PartyRepo::find_by_id(&state.pool, party_id).await?;
    Ok(Html(views::gift::gift_detail_partial(party.as_ref(), &gift)))
}

// ---------------------------------------------------------------------------
// DELETE /party/{party_id}/gifts/{gift_id}/delete
// ---------------------------------------------------------------------------

pub async fn delete(
    State(state): State<AppState>,
    Path((_party_id, gift_id)): Path<(DbId, DbId)>,
) -> AppResult<Html<String>> {
    let gift = GiftRepo::delete(&state.pool, gift_id)
        .await?
        .ok_or_else(|| gift_not_found(gift_id))?;
    tracing::info!(id = %gift.id, party_id = %gift.party_id, "Gift removed");
    Ok(Html(views::gift::gift_removed_partial(&gift)))
}
