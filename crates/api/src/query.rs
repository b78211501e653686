//! Shared query parameter types for handlers.

use party_core::pagination::PageWindow;
use serde::Deserialize;

/// `?page=` on the party list.
///
/// Kept as a raw string so a malformed value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn window(&self) -> PageWindow {
        PageWindow::from_query(self.page.as_deref())
    }
}
