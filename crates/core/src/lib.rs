//! Domain types and decision logic for the party planner.
//!
//! This crate has no I/O: it holds the id/timestamp aliases, the shared
//! [`error::CoreError`], the guest filter resolver, the party-list paginator
//! and the field rules applied to incoming forms.

pub mod error;
pub mod gift;
pub mod guest_filter;
pub mod pagination;
pub mod party;
pub mod types;
