//! Gift registry page and the gift fragments swapped in by htmx.

use std::fmt::Write;

use party_core::gift::MAX_GIFT_NAME_LENGTH;
use party_core::types::DbId;
use party_db::models::gift::Gift;
use party_db::models::party::Party;

use super::{escape, layout};

/// Heading for a registry whose party may not exist.
fn registry_title(party: Option<&Party>) -> String {
    match party {
        Some(p) => format!("Gift registry for {}", p.venue),
        None => "Gift registry".to_string(),
    }
}

/// Full registry page: every gift of the party plus an add-gift form.
pub fn gift_registry_page(party_id: DbId, party: Option<&Party>, gifts: &[Gift]) -> String {
    let title = registry_title(party);
    let mut items = String::new();
    for gift in gifts {
        items.push_str(&gift_detail_partial(party, gift));
        items.push('\n');
    }

    let body = format!(
        r##"<h1>{heading}</h1>
<ul id="gift-list">
{items}</ul>
<form id="add-gift-form" hx-post="/party/{party_id}/gifts" hx-target="#gift-list" hx-swap="beforeend">
<label>Gift <input type="text" name="gift_name" maxlength="{MAX_GIFT_NAME_LENGTH}" required></label>
<label>Price <input type="number" name="price" min="0" step="0.01" required></label>
<label>Link <input type="url" name="link"></label>
<button type="submit">Add gift</button>
</form>"##,
        heading = escape(&title),
    );
    layout(&title, &body)
}

/// One gift, with edit and delete controls.
pub fn gift_detail_partial(party: Option<&Party>, gift: &Gift) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r##"<li class="gift" id="gift-{id}" hx-target="this" hx-swap="outerHTML">
<span class="gift-name">{name}</span>
<span class="gift-price">{price:.2}</span>"##,
        id = gift.id,
        name = escape(&gift.gift_name),
        price = gift.price,
    );
    if let Some(link) = &gift.link {
        let _ = write!(
            html,
            r#"
<a class="gift-link" href="{href}" rel="noopener" target="_blank">view</a>"#,
            href = escape(link)
        );
    }
    if let Some(p) = party {
        let _ = write!(
            html,
            r#"
<span class="gift-party">{}</span>"#,
            escape(&p.venue)
        );
    }
    let _ = write!(
        html,
        r##"
<button hx-get="/party/{party_id}/gifts/{id}/edit">Edit</button>
<button hx-delete="/party/{party_id}/gifts/{id}/delete" hx-confirm="Remove this gift?">Remove</button>
</li>"##,
        party_id = gift.party_id,
        id = gift.id,
    );
    html
}

/// Inline edit form that replaces the gift's list item.
pub fn gift_update_partial(party_id: DbId, gift: &Gift) -> String {
    format!(
        r##"<li class="gift" id="gift-{id}">
<form id="update-gift-form" hx-put="/party/{party_id}/gifts/{id}/edit" hx-target="#gift-{id}" hx-swap="outerHTML">
<label>Gift <input type="text" name="gift_name" value="{name}" maxlength="{MAX_GIFT_NAME_LENGTH}" required></label>
<label>Price <input type="number" name="price" value="{price:.2}" min="0" step="0.01" required></label>
<label>Link <input type="url" name="link" value="{link}"></label>
<button type="submit">Save</button>
<button hx-get="/party/{party_id}/gifts/{id}" hx-target="#gift-{id}" hx-swap="outerHTML">Cancel</button>
</form>
</li>"##,
        id = gift.id,
        name = escape(&gift.gift_name),
        price = gift.price,
        link = escape(gift.link.as_deref().unwrap_or_default()),
    )
}

/// Placeholder left behind after a gift is deleted.
pub fn gift_removed_partial(gift: &Gift) -> String {
    format!(
        r#"<li class="gift removed" id="gift-{id}">Removed {name}</li>"#,
        id = gift.id,
        name = escape(&gift.gift_name),
    )
}
