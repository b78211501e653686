//! Party entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use party_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::form::time_with_optional_seconds;

/// A party row from the `parties` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Party {
    pub id: DbId,
    pub party_date: NaiveDate,
    pub party_time: NaiveTime,
    pub invitation: String,
    pub venue: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new party, as submitted by the new-party form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateParty {
    pub party_date: NaiveDate,
    #[serde(deserialize_with = "time_with_optional_seconds")]
    pub party_time: NaiveTime,
    /// Counted as submitted; only the inline warning trims.
    #[validate(length(min = 10, message = "Invitation must be at least 10 characters"))]
    pub invitation: String,
    #[validate(length(max = 100, message = "Venue must be at most 100 characters"))]
    pub venue: String,
}
