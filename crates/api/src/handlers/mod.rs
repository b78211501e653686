pub mod gift;
pub mod guest;
pub mod party;
