//! Guest list page, filter form and list fragments.

use std::fmt::Write;

use party_core::guest_filter::{FILTER_ALL, FILTER_ATTENDING, FILTER_NOT_ATTENDING};
use party_core::types::DbId;
use party_db::models::guest::Guest;

use super::{escape, layout};

/// Full guest list page.
pub fn guest_list_page(party_id: DbId, guests: &[Guest]) -> String {
    let body = format!(
        r##"<h1>Guest list</h1>
<a href="/party/{party_id}">Back to party</a>
<div id="guest-filter-and-list">
{fragment}
</div>
<form id="add-guest-form" hx-post="/party/{party_id}/guests" hx-target="#guest-filter-and-list">
<label>Name <input type="text" name="name" maxlength="100" required></label>
<button type="submit">Invite</button>
</form>"##,
        fragment = guest_filter_and_list_partial(party_id, guests),
    );
    layout("Guest list", &body)
}

/// Filter form, bulk attendance controls and the guest list. Returned after
/// any change to attendance so the filter resets along with the list.
pub fn guest_filter_and_list_partial(party_id: DbId, guests: &[Guest]) -> String {
    format!(
        r##"<form id="guest-filter-form" hx-post="/party/{party_id}/guests/filter" hx-target="#guest-list" hx-trigger="input changed delay:300ms, change">
<input type="search" name="guest_search" placeholder="Search guests">
<select name="attending_filter">
<option value="{FILTER_ALL}" selected>All</option>
<option value="{FILTER_ATTENDING}">Attending</option>
<option value="{FILTER_NOT_ATTENDING}">Not attending</option>
</select>
</form>
<form id="guest-attendance-form" hx-target="#guest-filter-and-list">
<div id="guest-list">
{list}
</div>
<button hx-put="/party/{party_id}/guests/mark-attending">Mark attending</button>
<button hx-put="/party/{party_id}/guests/mark-not-attending">Mark not attending</button>
</form>"##,
        list = guest_list_partial(guests),
    )
}

/// Table of guests with a checkbox per guest for bulk updates.
pub fn guest_list_partial(guests: &[Guest]) -> String {
    if guests.is_empty() {
        return r#"<p class="empty">No guests found.</p>"#.to_string();
    }

    let mut html = String::from(
        "<table class=\"guests\">\n<thead><tr><th></th><th>Name</th><th>Attending</th></tr></thead>\n<tbody>\n",
    );
    for guest in guests {
        let _ = writeln!(
            html,
            r#"<tr id="guest-{id}"><td><input type="checkbox" name="guest_ids" value="{id}"></td><td class="guest-name">{name}</td><td class="guest-attending">{attending}</td></tr>"#,
            id = guest.id,
            name = escape(&guest.name),
            attending = if guest.attending { "yes" } else { "no" },
        );
    }
    html.push_str("</tbody>\n</table>");
    html
}
