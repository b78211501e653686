//! Guest list filtering.
//!
//! The guest list page posts two fields: an attendance selector and a free
//! text search. [`GuestFilter::resolve`] turns that pair into exactly one
//! predicate variant; the repository layer translates the variant into SQL
//! and [`GuestFilter::matches`] evaluates it in memory.

// ---------------------------------------------------------------------------
// Attendance selector
// ---------------------------------------------------------------------------

/// Form value for "every guest".
pub const FILTER_ALL: &str = "all";

/// Form value for "only guests marked attending".
pub const FILTER_ATTENDING: &str = "attending";

/// Form value for "only guests not marked attending".
pub const FILTER_NOT_ATTENDING: &str = "not_attending";

/// Attendance selector posted by the guest filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceFilter {
    All,
    Attending,
    NotAttending,
}

impl AttendanceFilter {
    /// Parse the raw form value. Unknown values yield `None`, which
    /// [`GuestFilter::resolve`] treats as "no filter at all".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            FILTER_ALL => Some(Self::All),
            FILTER_ATTENDING => Some(Self::Attending),
            FILTER_NOT_ATTENDING => Some(Self::NotAttending),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Attending => FILTER_ATTENDING,
            Self::NotAttending => FILTER_NOT_ATTENDING,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved predicate
// ---------------------------------------------------------------------------

/// A guest predicate, always scoped to one party by the caller.
///
/// | variant                   | predicate (besides `party_id = P`)          |
/// |---------------------------|---------------------------------------------|
/// | `Unfiltered`              | none                                        |
/// | `Attendance(a)`           | `attending = a`                             |
/// | `Search(s)`               | `name ILIKE %s%`                            |
/// | `AttendanceAndSearch(a,s)`| `attending = a AND name ILIKE %s%`          |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestFilter {
    Unfiltered,
    Attendance(bool),
    Search(String),
    AttendanceAndSearch(bool, String),
}

impl GuestFilter {
    /// Pick the predicate for an attendance selector and search text.
    ///
    /// Search text counts as present only when non-empty. An unknown
    /// selector (`None`) falls back to [`GuestFilter::Unfiltered`] even if
    /// search text was supplied.
    pub fn resolve(filter: Option<AttendanceFilter>, search_text: &str) -> Self {
        let has_search_text = !search_text.is_empty();

        match (filter, has_search_text) {
            (Some(AttendanceFilter::Attending), false) => Self::Attendance(true),
            (Some(AttendanceFilter::NotAttending), false) => Self::Attendance(false),
            (Some(AttendanceFilter::Attending), true) => {
                Self::AttendanceAndSearch(true, search_text.to_string())
            }
            (Some(AttendanceFilter::NotAttending), true) => {
                Self::AttendanceAndSearch(false, search_text.to_string())
            }
            (Some(AttendanceFilter::All), true) => Self::Search(search_text.to_string()),
            (Some(AttendanceFilter::All), false) | (None, _) => Self::Unfiltered,
        }
    }

    /// Resolve straight from the raw form fields.
    pub fn from_form(attending_filter: &str, search_text: &str) -> Self {
        Self::resolve(AttendanceFilter::parse(attending_filter), search_text)
    }

    /// Required value of the `attending` column, if constrained.
    pub fn attending(&self) -> Option<bool> {
        match self {
            Self::Attendance(a) | Self::AttendanceAndSearch(a, _) => Some(*a),
            Self::Unfiltered | Self::Search(_) => None,
        }
    }

    /// Substring the guest name must contain, if constrained.
    pub fn search_text(&self) -> Option<&str> {
        match self {
            Self::Search(s) | Self::AttendanceAndSearch(_, s) => Some(s),
            Self::Unfiltered | Self::Attendance(_) => None,
        }
    }

    /// `ILIKE` pattern for the search text with `\`, `%` and `_` escaped,
    /// so the text matches literally anywhere in the name.
    pub fn ilike_pattern(&self) -> Option<String> {
        self.search_text().map(|s| format!("%{}%", escape_like(s)))
    }

    /// Evaluate the predicate against one guest's fields.
    pub fn matches(&self, name: &str, attending: bool) -> bool {
        let attending_ok = self.attending().is_none_or(|a| a == attending);
        let search_ok = self
            .search_text()
            .is_none_or(|s| name.to_lowercase().contains(&s.to_lowercase()));
        attending_ok && search_ok
    }
}

/// Escape the `LIKE` metacharacters in `input` using `\` as escape char.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
