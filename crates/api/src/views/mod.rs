//! Server-side HTML rendering.
//!
//! Every view is a plain function from records to a `String`. Full pages wrap
//! their body in [`layout`]; `*_partial` functions return the fragment htmx
//! swaps into an existing page. All interpolated text goes through
//! [`escape`].

pub mod gift;
pub mod guest;
pub mod party;

use std::fmt::Write;

/// htmx bundle loaded by every full page.
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{HTMX_SRC}"></script>
</head>
<body>
<header><a href="/">Upcoming parties</a> | <a href="/party/new">New party</a></header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    );
    html
}

/// Fragment rendered for any failed request.
pub fn error_fragment(code: &str, message: &str) -> String {
    format!(
        r#"<div class="error" role="alert" data-code="{}">{}</div>"#,
        escape(code),
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Anna Smith"), "Anna Smith");
    }

    #[test]
    fn layout_escapes_title_and_loads_htmx() {
        let html = layout("<Party>", "<p>body</p>");
        assert!(html.contains("<title>&lt;Party&gt;</title>"));
        assert!(html.contains(HTMX_SRC));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn error_fragment_carries_code() {
        let html = error_fragment("NOT_FOUND", "Gift <x> missing");
        assert!(html.contains(r#"data-code="NOT_FOUND""#));
        assert!(html.contains("Gift &lt;x&gt; missing"));
    }
}
