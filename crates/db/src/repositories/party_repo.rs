//! Repository for the `parties` table.

use chrono::NaiveDate;
use party_core::pagination::PageWindow;
use party_core::types::DbId;
use sqlx::PgPool;

use crate::models::party::{CreateParty, Party};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, party_date, party_time, invitation, venue, created_at, updated_at";

/// Provides create and read operations for parties.
pub struct PartyRepo;

impl PartyRepo {
    /// Insert a new party, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateParty) -> Result<Party, sqlx::Error> {
        let query = format!(
            "INSERT INTO parties (party_date, party_time, invitation, venue)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Party>(&query)
            .bind(input.party_date)
            .bind(input.party_time)
            .bind(&input.invitation)
            .bind(&input.venue)
            .fetch_one(pool)
            .await
    }

    /// Find a party by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Party>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parties WHERE id = $1");
        sqlx::query_as::<_, Party>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count parties dated on or after `today`.
    pub async fn count_upcoming(pool: &PgPool, today: NaiveDate) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM parties WHERE party_date >= $1")
            .bind(today)
            .fetch_one(pool)
            .await
    }

    /// One page of parties dated on or after `today`, in insertion order.
    pub async fn list_upcoming(
        pool: &PgPool,
        today: NaiveDate,
        window: PageWindow,
    ) -> Result<Vec<Party>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parties
             WHERE party_date >= $1
             ORDER BY created_at, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Party>(&query)
            .bind(today)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }
}
