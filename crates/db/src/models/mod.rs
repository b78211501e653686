//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO, filled from a submitted form
//! - An update DTO where the entity can be edited in place

pub mod form;
pub mod gift;
pub mod guest;
pub mod party;
