//! Paging for the upcoming-party list.

/// Number of parties shown per page.
pub const PAGE_SIZE: i64 = 6;

/// First page number. Pages are 1-based.
pub const FIRST_PAGE: i64 = 1;

/// A page request after clamping: which slice of the result set to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Build the window for `page`, clamping anything below 1 to 1.
    pub fn new(page: i64) -> Self {
        let page = page.max(FIRST_PAGE);
        Self {
            page,
            offset: (page - 1).saturating_mul(PAGE_SIZE),
            limit: PAGE_SIZE,
        }
    }

    /// Build the window from a raw query value. Missing or non-numeric input
    /// means the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(FIRST_PAGE);
        Self::new(page)
    }

    /// Number of the following page, given the total row count.
    ///
    /// A next page is advertised whenever this window ends at or before
    /// `total`, so an exact multiple of the page size still points at one
    /// (empty) extra page.
    pub fn next_page(&self, total: i64) -> Option<i64> {
        if self.offset.saturating_add(self.limit) <= total {
            Some(self.page + 1)
        } else {
            None
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(FIRST_PAGE)
    }
}
