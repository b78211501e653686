//! Repository for the `guests` table.

use party_core::guest_filter::GuestFilter;
use party_core::types::DbId;
use sqlx::PgPool;

use crate::models::guest::{CreateGuest, Guest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, attending, party_id, created_at, updated_at";

/// Provides create, filtered listing and bulk attendance updates for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest for `party_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        party_id: DbId,
        input: &CreateGuest,
    ) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (name, attending, party_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(&input.name)
            .bind(input.attending)
            .bind(party_id)
            .fetch_one(pool)
            .await
    }

    /// Find a guest by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests WHERE id = $1");
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every guest of a party in insertion order.
    pub async fn list_by_party(pool: &PgPool, party_id: DbId) -> Result<Vec<Guest>, sqlx::Error> {
        Self::filter(pool, party_id, &GuestFilter::Unfiltered).await
    }

    /// List the guests of a party that satisfy `filter`, in insertion order.
    ///
    /// An unknown party yields an empty list.
    pub async fn filter(
        pool: &PgPool,
        party_id: DbId,
        filter: &GuestFilter,
    ) -> Result<Vec<Guest>, sqlx::Error> {
        const ORDER: &str = "ORDER BY created_at, id";
        const NAME_MATCHES: &str = "name ILIKE $2 ESCAPE '\\'";
        let pattern = filter.ilike_pattern();

        let rows = match filter {
            GuestFilter::Unfiltered => {
                let query = format!("SELECT {COLUMNS} FROM guests WHERE party_id = $1 {ORDER}");
                sqlx::query_as::<_, Guest>(&query)
                    .bind(party_id)
                    .fetch_all(pool)
                    .await?
            }
            GuestFilter::Attendance(attending) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM guests \
                     WHERE party_id = $1 AND attending = $2 {ORDER}"
                );
                sqlx::query_as::<_, Guest>(&query)
                    .bind(party_id)
                    .bind(*attending)
                    .fetch_all(pool)
                    .await?
            }
            GuestFilter::Search(_) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM guests \
                     WHERE party_id = $1 AND {NAME_MATCHES} {ORDER}"
                );
                sqlx::query_as::<_, Guest>(&query)
                    .bind(party_id)
                    .bind(&pattern)
                    .fetch_all(pool)
                    .await?
            }
            GuestFilter::AttendanceAndSearch(attending, _) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM guests \
                     WHERE party_id = $1 AND {NAME_MATCHES} AND attending = $3 {ORDER}"
                );
                sqlx::query_as::<_, Guest>(&query)
                    .bind(party_id)
                    .bind(&pattern)
                    .bind(*attending)
                    .fetch_all(pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// Set `attending` for exactly the guests in `ids`, regardless of party,
    /// in a single transaction. Returns the number of rows touched.
    pub async fn set_attending(
        pool: &PgPool,
        ids: &[DbId],
        attending: bool,
    ) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;

        let result = sqlx::query("UPDATE guests SET attending = $1 WHERE id = ANY($2)")
            .bind(attending)
            .bind(ids)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let updated = result.rows_affected();
        tracing::debug!(requested = ids.len(), updated, attending, "Set guest attendance");
        Ok(updated)
    }
}

