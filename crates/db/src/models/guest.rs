//! Guest entity model and DTOs.

use party_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A guest row from the `guests` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Guest {
    pub id: DbId,
    pub name: String,
    pub attending: bool,
    pub party_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inviting a guest to a party. The party comes from the URL.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuest {
    #[validate(length(min = 1, max = 100, message = "Guest name must be 1-100 characters"))]
    pub name: String,
    /// Defaults to `false` if omitted.
    #[serde(default)]
    pub attending: bool,
}
