//! Integration tests for guest filtering and bulk attendance updates.

use chrono::{Local, NaiveTime};
use party_core::guest_filter::GuestFilter;
use party_db::models::guest::{CreateGuest, Guest};
use party_db::models::party::{CreateParty, Party};
use party_db::repositories::{GuestRepo, PartyRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_party(pool: &PgPool, venue: &str) -> Party {
    PartyRepo::create(
        pool,
        &CreateParty {
            party_date: Local::now().date_naive(),
            party_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            invitation: "Come to my party!".to_string(),
            venue: venue.to_string(),
        },
    )
    .await
    .unwrap()
}

async fn create_guest(pool: &PgPool, party: &Party, name: &str, attending: bool) -> Guest {
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

fn names(guests: &[Guest]) -> Vec<&str> {
    guests.iter().map(|g| g.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn listing_never_leaks_other_parties(pool: PgPool) {
    let party = create_party(&pool, "Main").await;
    let other = create_party(&pool, "Another Venue").await;
    let alice = create_guest(&pool, &party, "Alice", false).await;
    let bob = create_guest(&pool, &party, "Bob", true).await;
    create_guest(&pool, &other, "Alicia", true).await;

    let guests = GuestRepo::list_by_party(&pool, party.id).await.unwrap();
    assert_eq!(guests, vec![alice, bob]);

    for filter in [
        GuestFilter::from_form("attending", ""),
        GuestFilter::from_form("all", "ali"),
        GuestFilter::from_form("attending", "ali"),
    ] {
        let hits = GuestRepo::filter(&pool, party.id, &filter).await.unwrap();
        assert!(hits.iter().all(|g| g.party_id == party.id), "{filter:?}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn search_is_case_insensitive_substring(pool: PgPool) {
    let party = create_party(&pool, "Main").await;
    create_guest(&pool, &party, "Anna", false).await;
    create_guest(&pool, &party, "Catherine", false).await;

    let hits = GuestRepo::filter(&pool, party.id, &GuestFilter::from_form("all", "an"))
        .await
        .unwrap();
    assert_eq!(names(&hits), vec!["Anna"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn each_selector_and_search_pair_returns_expected_rows(pool: PgPool) {
    let party = create_party(&pool, "Main").await;
    create_guest(&pool, &party, "Bob", true).await;
    create_guest(&pool, &party, "Bobby", false).await;
    create_guest(&pool, &party, "Carol", true).await;
    create_guest(&pool, &party, "Dave", false).await;

    let cases: [(&str, &str, Vec<&str>); 7] = [
        ("attending", "", vec!["Bob", "Carol"]),
        ("not_attending", "", vec!["Bobby", "Dave"]),
        ("attending", "bob", vec!["Bob"]),
        ("not_attending", "bob", vec!["Bobby"]),
        ("all", "BOB", vec!["Bob", "Bobby"]),
        ("all", "", vec!["Bob", "Bobby", "Carol", "Dave"]),
        ("unknown", "bob", vec!["Bob", "Bobby", "Carol", "Dave"]),
    ];

    for (selector, search, expected) in cases {
        let filter = GuestFilter::from_form(selector, search);
        let hits = GuestRepo::filter(&pool, party.id, &filter).await.unwrap();
        assert_eq!(names(&hits), expected, "selector={selector} search={search}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn like_metacharacters_match_literally(pool: PgPool) {
    let party = create_party(&pool, "Main").await;
    create_guest(&pool, &party, "100% Fun", false).await;
    create_guest(&pool, &party, "1000 Fun", false).await;

    let hits = GuestRepo::filter(&pool, party.id, &GuestFilter::from_form("all", "0%"))
        .await
        .unwrap();
    assert_eq!(names(&hits), vec!["100% Fun"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_party_yields_empty_list(pool: PgPool) {
    let hits = GuestRepo::filter(&pool, uuid::Uuid::new_v4(), &GuestFilter::Unfiltered)
        .await
        .unwrap();
    assert!(hits.is_empty());
}

// ---------------------------------------------------------------------------
// Bulk attendance
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn mark_attending_touches_only_listed_ids(pool: PgPool) {
    let party = create_party(&pool, "Main").await;
    let g1 = create_guest(&pool, &party, "Alice", false).await;
    let g2 = create_guest(&pool, &party, "Bob", false).await;

    let touched = GuestRepo::set_attending(&pool, &[g1.id], true).await.unwrap();
    assert_eq!(touched, 1);

    let g1 = GuestRepo::find_by_id(&pool, g1.id).await.unwrap().unwrap();
    let g2 = GuestRepo::find_by_id(&pool, g2.id).await.unwrap().unwrap();
    assert!(g1.attending);
    assert!(!g2.attending);
}

#[sqlx::test(migrations = "./migrations")]
async fn mark_then_unmark_restores_original_state(pool: PgPool) {
    let party = create_party(&pool, "Main").await;
    let g1 = create_guest(&pool, &party, "Alice", false).await;
    let g2 = create_guest(&pool, &party, "Bob", false).await;
    let bystander = create_guest(&pool, &party, "Carol", true).await;
    let ids = [g1.id, g2.id];

    GuestRepo::set_attending(&pool, &ids, true).await.unwrap();
    GuestRepo::set_attending(&pool, &ids, true).await.unwrap();
    let after_mark = GuestRepo::list_by_party(&pool, party.id).await.unwrap();
    assert!(after_mark.iter().all(|g| g.attending));

    GuestRepo::set_attending(&pool, &ids, false).await.unwrap();
    let after_unmark = GuestRepo::list_by_party(&pool, party.id).await.unwrap();

    let flags: Vec<_> = after_unmark.iter().map(|g| (g.id, g.attending)).collect();
    assert_eq!(
        flags,
        vec![(g1.id, false), (g2.id, false), (bystander.id, true)]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn bulk_update_ignores_party_scope(pool: PgPool) {
    let party = create_party(&pool, "Main").await;
    let other = create_party(&pool, "Another Venue").await;
    let outsider = create_guest(&pool, &other, "Eve", false).await;

    GuestRepo::set_attending(&pool, &[outsider.id], true)
        .await
        .unwrap();

    let outsider = GuestRepo::find_by_id(&pool, outsider.id)
        .await
        .unwrap()
        .unwrap();
    assert!(outsider.attending);
    assert!(GuestRepo::list_by_party(&pool, party.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_id_list_is_a_no_op(pool: PgPool) {
    let touched = GuestRepo::set_attending(&pool, &[], true).await.unwrap();
    assert_eq!(touched, 0);
}
