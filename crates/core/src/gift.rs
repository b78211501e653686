//! Gift field rules.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Maximum length of a gift name in characters.
pub const MAX_GIFT_NAME_LENGTH: u64 = 100;

/// Number of fractional digits stored for a price.
pub const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound on a price: the stored column holds at most eight
/// integer digits.
pub const PRICE_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Link schemes a registry entry may point at.
const LINK_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Prices must be non-negative, below [`PRICE_LIMIT`] and have at most two
/// decimal places.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("price_negative")
            .with_message("Price must not be negative".into()));
    }
    if *price >= PRICE_LIMIT {
        return Err(ValidationError::new("price_too_large")
            .with_message("Price must be below 100000000".into()));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("price_scale")
            .with_message("Price must have at most 2 decimal places".into()));
    }
    Ok(())
}

/// Links are rendered as `href`s, so only web URLs are accepted.
pub fn validate_link(link: &str) -> Result<(), ValidationError> {
    let lower = link.trim_start().to_ascii_lowercase();
    if LINK_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        Ok(())
    } else {
        Err(ValidationError::new("link_scheme")
            .with_message("Link must start with http:// or https://".into()))
    }
}
