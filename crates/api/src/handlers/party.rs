//! Handlers for the party list, party detail and new-party flow.

use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::{Local, NaiveDate};
use party_core::error::CoreError;
use party_core::party::{date_warning, invitation_warning};
use party_core::types::DbId;
use party_db::models::party::CreateParty;
use party_db::repositories::PartyRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppForm;
use crate::htmx::HxRequest;
use crate::query::PageParams;
use crate::state::AppState;
use crate::views;

/// Body of `POST /party/new/validate_date`.
#[derive(Debug, Deserialize)]
pub struct DateField {
    pub party_date: NaiveDate,
}

/// Body of `POST /party/new/validate_invitation`.
#[derive(Debug, Deserialize)]
pub struct InvitationField {
    pub invitation: String,
}

/// The current date, evaluated once per request.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Either a warning message (200) or nothing to say (204).
fn warning_response(warning: Option<&'static str>) -> Response {
    match warning {
        Some(msg) => (StatusCode::OK, Html(msg)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Upcoming parties, one page at a time. htmx requests get only the list
/// fragment so "load more" can append it.
pub async fn list(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<PageParams>,
) -> AppResult<Html<String>> {
    let today = today();
    let window = params.window();

    let total = PartyRepo::count_upcoming(&state.pool, today).await?;
    let parties = PartyRepo::list_upcoming(&state.pool, today, window).await?;
    let next_page = window.next_page(total);

    tracing::debug!(
        page = window.page,
        total,
        count = parties.len(),
        ?next_page,
        "Listed upcoming parties"
    );

    let html = if is_htmx {
        views::party::party_list_partial(&parties, next_page)
    } else {
        views::party::party_list_page(&parties, next_page)
    };
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// GET /party/{party_id}
// ---------------------------------------------------------------------------

pub async fn detail(
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<Html<String>> {
    let party = PartyRepo::find_by_id(&state.pool, party_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Party",
            id: party_id,
        }))?;
    Ok(Html(views::party::party_detail_page(&party)))
}

// ---------------------------------------------------------------------------
// GET /party/new
// ---------------------------------------------------------------------------

pub async fn new_form() -> Html<String> {
    Html(views::party::new_party_page())
}

// ---------------------------------------------------------------------------
// POST /party/new
// ---------------------------------------------------------------------------

/// Create a party and redirect to its detail page.
pub async fn create(
    State(state): State<AppState>,
    AppForm(input): AppForm<CreateParty>,
) -> AppResult<Response> {
    input.validate()?;

    let party = PartyRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %party.id, venue = %party.venue, date = %party.party_date, "Party created");

    let location = format!("/party/{}", party.id);
    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}

// ---------------------------------------------------------------------------
// POST /party/new/validate_date
// ---------------------------------------------------------------------------

pub async fn validate_date(AppForm(input): AppForm<DateField>) -> Response {
    warning_response(date_warning(input.party_date, today()))
}

// ---------------------------------------------------------------------------
// POST /party/new/validate_invitation
// ---------------------------------------------------------------------------

pub async fn validate_invitation(AppForm(input): AppForm<InvitationField>) -> Response {
    warning_response(invitation_warning(&input.invitation))
}
