//! Party field rules and the inline validation messages shown on the
//! new-party form.

use chrono::NaiveDate;

/// Maximum length of a venue in characters.
pub const MAX_VENUE_LENGTH: u64 = 100;

/// Minimum invitation length in characters. The inline warning counts it
/// after trimming; the create form counts it as submitted.
pub const MIN_INVITATION_LENGTH: usize = 10;

/// Shown when the chosen party date is before today.
pub const PAST_DATE_MESSAGE: &str = "You chose a date in the past.";

/// Shown when the invitation text is too short.
pub const SHORT_INVITATION_MESSAGE: &str = "You really should write an invitation.";

/// Warning for a party date, or `None` if the date is today or later.
pub fn date_warning(party_date: NaiveDate, today: NaiveDate) -> Option<&'static str> {
    (party_date < today).then_some(PAST_DATE_MESSAGE)
}

/// Warning for an invitation, or `None` if it is long enough.
pub fn invitation_warning(invitation: &str) -> Option<&'static str> {
    (invitation.trim().chars().count() < MIN_INVITATION_LENGTH).then_some(SHORT_INVITATION_MESSAGE)
}

/// Whether a party on `party_date` counts as upcoming on `today`.
pub fn is_upcoming(party_date: NaiveDate, today: NaiveDate) -> bool {
    party_date >= today
}
