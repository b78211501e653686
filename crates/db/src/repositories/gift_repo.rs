//! Repository for the `gifts` table.

use party_core::types::DbId;
use sqlx::PgPool;

use crate::models::gift::{CreateGift, Gift, UpdateGift};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, gift_name, price, link, party_id, created_at, updated_at";

/// Provides CRUD operations for gift registry entries.
pub struct GiftRepo;

impl GiftRepo {
    /// Insert a new gift for `party_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        party_id: DbId,
        input: &CreateGift,
    ) -> Result<Gift, sqlx::Error> {
        let query = format!(
            "INSERT INTO gifts (gift_name, price, link, party_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(&input.gift_name)
            .bind(input.price)
            .bind(&input.link)
            .bind(party_id)
            .fetch_one(pool)
            .await
    }

    /// Find a gift by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gifts WHERE id = $1");
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the gifts of a party in insertion order. An unknown party yields
    /// an empty list.
    pub async fn list_by_party(pool: &PgPool, party_id: DbId) -> Result<Vec<Gift>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gifts WHERE party_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(party_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a gift's name, price and link. The owning party never changes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGift,
    ) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!(
            "UPDATE gifts SET
                gift_name = $2,
                price = $3,
                link = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(&input.gift_name)
            .bind(input.price)
            .bind(&input.link)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gift, returning the removed row so it can still be rendered.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!("DELETE FROM gifts WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
