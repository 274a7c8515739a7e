// src/formatting/index.rs
//! Rewrites the article list and the article count of the index page.
//!
//! List items come from an embedded Handlebars template. The list replaces
//! whatever sits between the two marker comments, so running the build
//! twice on the same data leaves the file unchanged the second time.

use super::properties::ArticleMetadata;
use crate::constants::{ARTICLES_END_MARKER, ARTICLES_START_MARKER, ARTICLE_COUNT_PATTERN};
use crate::error::AppError;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde_json::json;

const LIST_ITEM_TEMPLATE_NAME: &str = "article-list-item";
const TAG_CHIP_TEMPLATE_NAME: &str = "article-tag-chip";

// Chips are rendered one by one and inserted raw, so that each keeps its own
// leading newline and trailing indentation.
const TAG_CHIP_TEMPLATE: &str = r#"
        <div class="article-tag-container">
          <p class="article-tag"><span class="text-rgb-30-30-30">{{topic}}</span></p>
        </div>
        "#;

const LIST_ITEM_TEMPLATE: &str = r#"
      <a href="{{filename}}" class="article-row">
        <div class="article-date-container">
          <div class="article-margin">
            <div class="article-dot"></div>
          </div>
          <div class="article-date-wrapper">
            <p class="article-date"><span class="text-rgb-30-30-30">{{date}}</span></p>
          </div>
        </div>
        <div class="article-title-container">
          <div class="article-title-wrapper">
            <p class="article-title"><span class="text-rgb-30-30-30">{{title}}</span></p>
          </div>
        </div>
        <div class="article-tags-wrapper" style="display: flex; gap: 4px; width: 50px; justify-content: flex-end;">
          {{{tags}}}
        </div>
        <div class="article-arrow">
          <img src="images/article-vector-29.svg" class="article-vector-bg" alt="vector" />
          <img src="images/article-vector-30.svg" class="article-vector-fg" alt="vector" />
        </div>
      </a>
    "#;

static ARTICLE_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(ARTICLE_COUNT_PATTERN)
        .expect("Failed to compile article count regex - this is a bug in the code")
});

/// Renders the per-entry fragments of the index list.
pub struct ListItemRenderer {
    handlebars: Handlebars<'static>,
}

impl ListItemRenderer {
    /// Values are inserted verbatim unless `escape_html` is set.
    pub fn new(escape_html: bool) -> Result<Self, AppError> {
        let mut handlebars = Handlebars::new();
        if !escape_html {
            handlebars.register_escape_fn(handlebars::no_escape);
        }
        for (name, source) in [
            (LIST_ITEM_TEMPLATE_NAME, LIST_ITEM_TEMPLATE),
            (TAG_CHIP_TEMPLATE_NAME, TAG_CHIP_TEMPLATE),
        ] {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| AppError::TemplateRenderError {
                    name: name.to_string(),
                    message: e.to_string(),
                })?;
        }
        Ok(Self { handlebars })
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, AppError> {
        self.handlebars
            .render(name, data)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })
    }

    /// Renders one list item linking to `filename`.
    pub fn render(&self, metadata: &ArticleMetadata, filename: &str) -> Result<String, AppError> {
        let mut tags = String::new();
        for topic in &metadata.topics {
            tags.push_str(&self.render_named(TAG_CHIP_TEMPLATE_NAME, &json!({ "topic": topic }))?);
        }

        let data = json!({
            "filename": filename,
            "date": metadata.date,
            "title": metadata.title,
            "tags": tags,
        });
        self.render_named(LIST_ITEM_TEMPLATE_NAME, &data)
    }
}

/// Replaces the text between the first start marker and the first end marker
/// after it with `list_html`, keeping both markers.
pub fn splice_article_list(
    index_html: &str,
    list_html: &str,
    index_path: &str,
) -> Result<String, AppError> {
    let missing = |marker| AppError::IndexMarkersMissing {
        path: index_path.to_string(),
        marker,
    };

    let start = index_html
        .find(ARTICLES_START_MARKER)
        .ok_or_else(|| missing(ARTICLES_START_MARKER))?;
    let region_start = start + ARTICLES_START_MARKER.len();
    let end = index_html[region_start..]
        .find(ARTICLES_END_MARKER)
        .map(|offset| region_start + offset)
        .ok_or_else(|| missing(ARTICLES_END_MARKER))?;

    let mut spliced = String::with_capacity(index_html.len() + list_html.len());
    spliced.push_str(&index_html[..region_start]);
    spliced.push('\n');
    spliced.push_str(list_html);
    spliced.push('\n');
    spliced.push_str(&index_html[end..]);
    Ok(spliced)
}

/// Rewrites the first article count display to `(count)`; later ones are
/// left alone. Returns the new text and whether a count display was found.
pub fn update_article_count(index_html: &str, count: usize) -> (String, bool) {
    if !ARTICLE_COUNT.is_match(index_html) {
        return (index_html.to_string(), false);
    }

    let replacement = format!(
        r#"<p class="text-104"><span class="text-rgb-30-30-30">({})</span></p>"#,
        count
    );
    let updated = ARTICLE_COUNT.replacen(index_html, 1, NoExpand(&replacement));
    (updated.into_owned(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COUNT_4: &str = r#"<p class="text-104"><span class="text-rgb-30-30-30">(4)</span></p>"#;

    fn metadata(topics: &[&str]) -> ArticleMetadata {
        ArticleMetadata {
            title: "Hello".to_string(),
            date: "05.03.2024".to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn list_item_links_to_article_and_shows_fields() {
        let renderer = ListItemRenderer::new(false).unwrap();
        let html = renderer
            .render(&metadata(&["Notes", "Rust"]), "article-abc.html")
            .unwrap();

        assert!(html.contains(r#"<a href="article-abc.html" class="article-row">"#));
        assert!(html.contains(r#"<span class="text-rgb-30-30-30">05.03.2024</span>"#));
        assert!(html.contains(r#"<span class="text-rgb-30-30-30">Hello</span>"#));
        assert_eq!(html.matches("article-tag-container").count(), 2);
        assert!(html.find(">Notes<").unwrap() < html.find(">Rust<").unwrap());
    }

    #[test]
    fn list_item_keeps_legacy_whitespace() {
        let renderer = ListItemRenderer::new(false).unwrap();
        let html = renderer
            .render(&metadata(&["Notes", "Rust"]), "article-abc.html")
            .unwrap();

        let chip = |topic: &str| {
            format!(
                "\n        <div class=\"article-tag-container\">\n          <p class=\"article-tag\"><span class=\"text-rgb-30-30-30\">{}</span></p>\n        </div>\n        ",
                topic
            )
        };
        let tags_line = format!(
            "justify-content: flex-end;\">\n          {}{}\n        </div>\n        <div class=\"article-arrow\">",
            chip("Notes"),
            chip("Rust")
        );

        assert!(html.starts_with("\n      <a href=\"article-abc.html\" class=\"article-row\">\n"));
        assert!(html.contains(&tags_line));
        assert!(html.ends_with("\n      </a>\n    "));
    }

    #[test]
    fn list_item_values_are_verbatim_unless_escaping() {
        let mut meta = metadata(&["A&B"]);
        meta.title = "<em>Hi</em>".to_string();

        let raw = ListItemRenderer::new(false).unwrap().render(&meta, "a.html").unwrap();
        assert!(raw.contains("<em>Hi</em>"));
        assert!(raw.contains(">A&B<"));

        let escaped = ListItemRenderer::new(true).unwrap().render(&meta, "a.html").unwrap();
        assert!(escaped.contains("&lt;em&gt;Hi&lt;/em&gt;"));
        assert!(escaped.contains(">A&amp;B<"));
    }

    #[test]
    fn splice_replaces_region_between_markers() {
        let index = "<ul><!-- ARTICLES_START -->old stuff<!-- ARTICLES_END --></ul>";
        let spliced = splice_article_list(index, "<li>new</li>", "index.html").unwrap();
        assert_eq!(
            spliced,
            "<ul><!-- ARTICLES_START -->\n<li>new</li>\n<!-- ARTICLES_END --></ul>"
        );
    }

    #[test]
    fn splice_is_idempotent() {
        let index = "head\n<!-- ARTICLES_START -->\nstale\n<!-- ARTICLES_END -->\ntail";
        let once = splice_article_list(index, "A\nB", "index.html").unwrap();
        let twice = splice_article_list(&once, "A\nB", "index.html").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn splice_with_empty_list_leaves_blank_region() {
        let index = "<!-- ARTICLES_START -->x<!-- ARTICLES_END -->";
        assert_eq!(
            splice_article_list(index, "", "index.html").unwrap(),
            "<!-- ARTICLES_START -->\n\n<!-- ARTICLES_END -->"
        );
    }

    #[test]
    fn missing_start_marker_is_an_error() {
        let err = splice_article_list("<!-- ARTICLES_END -->", "", "index.html").unwrap_err();
        assert!(matches!(
            err,
            AppError::IndexMarkersMissing {
                marker: ARTICLES_START_MARKER,
                ..
            }
        ));
    }

    #[test]
    fn end_marker_before_start_counts_as_missing() {
        let index = "<!-- ARTICLES_END --> <!-- ARTICLES_START -->";
        let err = splice_article_list(index, "", "index.html").unwrap_err();
        assert!(matches!(
            err,
            AppError::IndexMarkersMissing {
                marker: ARTICLES_END_MARKER,
                ..
            }
        ));
    }

    #[test]
    fn only_first_count_display_is_rewritten() {
        let index = format!("{}\n<hr>\n{}", COUNT_4, COUNT_4);
        let (updated, found) = update_article_count(&index, 9);
        let count_9 = r#"<p class="text-104"><span class="text-rgb-30-30-30">(9)</span></p>"#;
        assert!(found);
        assert_eq!(updated, format!("{}\n<hr>\n{}", count_9, COUNT_4));
        assert!(updated.ends_with("(4)</span></p>"));
    }

    #[test]
    fn count_to_zero() {
        let (updated, _) = update_article_count(COUNT_4, 0);
        assert!(updated.contains("(0)"));
    }

    #[test]
    fn missing_count_display_is_reported() {
        let (updated, found) = update_article_count("<p>(4)</p>", 3);
        assert!(!found);
        assert_eq!(updated, "<p>(4)</p>");
    }
}
