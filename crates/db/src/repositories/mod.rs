//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod gift_repo;
pub mod guest_repo;
pub mod party_repo;

pub use gift_repo::GiftRepo;
pub use guest_repo::GuestRepo;
pub use party_repo::PartyRepo;
