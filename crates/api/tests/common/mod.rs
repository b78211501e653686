#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use chrono::{Days, Local, NaiveDate, NaiveTime};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use party_api::config::ServerConfig;
use party_api::htmx::HX_REQUEST;
use party_api::router::build_app_router;
use party_api::state::AppState;
use party_db::models::guest::{CreateGuest, Guest};
use party_db::models::party::{CreateParty, Party};
use party_db::repositories::{GuestRepo, PartyRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn form_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// GET as htmx would send it, with `HX-Request: true`.
pub async fn get_htmx(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(HX_REQUEST, "true")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, form_request(Method::POST, uri, body)).await
}

pub async fn put_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, form_request(Method::PUT, uri, body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_from_today(days: i64) -> NaiveDate {
    if days >= 0 {
        today() + Days::new(days as u64)
    } else {
        today() - Days::new(days.unsigned_abs())
    }
}

pub async fn create_party_on(pool: &PgPool, venue: &str, date: NaiveDate) -> Party {
    PartyRepo::create(
        pool,
        &CreateParty {
            party_date: date,
            party_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            invitation: "Please join us for a lovely evening.".to_string(),
            venue: venue.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn create_party(pool: &PgPool, venue: &str) -> Party {
    create_party_on(pool, venue, days_from_today(7)).await
}

pub async fn create_guest(pool: &PgPool, party: &Party, name: &str, attending: bool) -> Guest {
    GuestRepo::create(
        pool,
        party.id,
        &CreateGuest {
            name: name.to_string(),
            attending,
        },
    )
    .await
    .unwrap()
}
