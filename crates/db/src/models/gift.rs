//! Gift entity model and DTOs.

use party_core::gift::{validate_link, validate_price};
use party_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::form::empty_string_as_none;

/// A gift row from the `gifts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Gift {
    pub id: DbId,
    pub gift_name: String,
    pub price: Decimal,
    pub link: Option<String>,
    pub party_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a gift to a party's registry. The party comes from the URL.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGift {
    #[validate(length(min = 1, max = 100, message = "Gift name must be 1-100 characters"))]
    pub gift_name: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(message = "Link must be a valid URL"), custom(function = "validate_link"))]
    pub link: Option<String>,
}

/// DTO for the gift edit form. Every field is replaced; a blank link clears it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGift {
    #[validate(length(min = 1, max = 100, message = "Gift name must be 1-100 characters"))]
    pub gift_name: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(message = "Link must be a valid URL"), custom(function = "validate_link"))]
    pub link: Option<String>,
}
