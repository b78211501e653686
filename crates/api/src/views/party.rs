//! Party list, party detail and new-party form.

use std::fmt::Write;

use party_core::party::{MAX_VENUE_LENGTH, MIN_INVITATION_LENGTH};
use party_db::models::party::Party;

use super::{escape, layout};

/// Full upcoming-party page.
pub fn party_list_page(parties: &[Party], next_page: Option<i64>) -> String {
    let body = format!(
        r#"<h1>Upcoming parties</h1>
<div id="party-list">
{}
</div>"#,
        party_list_partial(parties, next_page)
    );
    layout("Upcoming parties", &body)
}

/// Party cards plus, if there is another page, an element that loads it
/// when scrolled into view and replaces itself with the result.
pub fn party_list_partial(parties: &[Party], next_page: Option<i64>) -> String {
    let mut html = String::new();
    for party in parties {
        let _ = write!(
            html,
            r#"<article class="party-card" id="party-{id}">
<a href="/party/{id}"><h2>{venue}</h2></a>
<p>{date} at {time}</p>
</article>
"#,
            id = party.id,
            venue = escape(&party.venue),
            date = party.party_date,
            time = party.party_time.format("%H:%M"),
        );
    }
    if let Some(next) = next_page {
        let _ = write!(
            html,
            r#"<div class="load-more" hx-get="/?page={next}" hx-trigger="revealed" hx-swap="outerHTML">Loading more parties...</div>
"#
        );
    }
    html
}

/// Party detail page with links to its gift registry and guest list.
pub fn party_detail_page(party: &Party) -> String {
    let body = format!(
        r#"<section id="party-detail">
<h1>{venue}</h1>
<p class="when">{date} at {time}</p>
<blockquote class="invitation">{invitation}</blockquote>
<nav>
<a href="/party/{id}/gifts">Gift registry</a>
<a href="/party/{id}/guests">Guest list</a>
</nav>
</section>"#,
        id = party.id,
        venue = escape(&party.venue),
        date = party.party_date,
        time = party.party_time.format("%H:%M"),
        invitation = escape(&party.invitation),
    );
    layout(&party.venue, &body)
}

/// New-party form. Date and invitation are checked inline as the user types.
pub fn new_party_page() -> String {
    let body = format!(
        r##"<h1>Plan a new party</h1>
<form id="new-party-form" method="post" action="/party/new">
<label>Date
<input type="date" name="party_date" required
       hx-post="/party/new/validate_date" hx-trigger="change" hx-target="#date-warning">
</label>
<span id="date-warning" class="warning"></span>
<label>Time <input type="time" name="party_time" required></label>
<label>Venue <input type="text" name="venue" maxlength="{MAX_VENUE_LENGTH}" required></label>
<label>Invitation
<textarea name="invitation" minlength="{MIN_INVITATION_LENGTH}" required
          hx-post="/party/new/validate_invitation" hx-trigger="keyup changed delay:500ms" hx-target="#invitation-warning"></textarea>
</label>
<span id="invitation-warning" class="warning"></span>
<button type="submit">Create party</button>
</form>"##
    );
    layout("New party", &body)
}
