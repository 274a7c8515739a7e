// src/formatting/rich_text.rs
//! Flattens rich text runs into the text inserted into HTML.

use crate::model::{join_plain_text, RichTextItem};

/// Joins the runs' plain text, HTML-escaped only when `escape` is set.
pub fn render_text(items: &[RichTextItem], escape: bool) -> String {
    escape_if(&join_plain_text(items), escape)
}

/// Escapes `text` for HTML when `escape` is set; otherwise returns it verbatim.
pub fn escape_if(text: &str, escape: bool) -> String {
    if escape {
        handlebars::html_escape(text)
    } else {
        text.to_string()
    }
}
