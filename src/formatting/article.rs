// src/formatting/article.rs
//! Composes article pages from the article template.
//!
//! The template is plain HTML with four literal placeholders. Substitution
//! is whole-string replacement; nothing else in the file is interpreted.

use super::properties::ArticleMetadata;
use super::rich_text::escape_if;
use crate::constants::{
    CONTENT_PLACEHOLDER, DATE_PLACEHOLDER, TITLE_PLACEHOLDER, TOPIC_PLACEHOLDER,
};
use crate::error::AppError;
use std::path::Path;

/// The article template's text, as read from disk.
#[derive(Debug, Clone)]
pub struct ArticleTemplate {
    source: String,
}

impl ArticleTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Reads the template. Called once per article, so edits to the file
    /// during a run are picked up by later articles.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let source = std::fs::read_to_string(path).map_err(|e| AppError::TemplateNotFound {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::new(source))
    }

    /// Fills in the placeholders. `content` is inserted as given; header
    /// fields are escaped only when `escape_html` is set.
    pub fn render(&self, metadata: &ArticleMetadata, content: &str, escape_html: bool) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, &escape_if(&metadata.title, escape_html))
            .replace(DATE_PLACEHOLDER, &escape_if(&metadata.date, escape_html))
            .replace(TOPIC_PLACEHOLDER, &escape_if(&metadata.topic_line(), escape_html))
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

/// Loads the template at `template_path` and renders one article.
pub fn render_article(
    template_path: &Path,
    metadata: &ArticleMetadata,
    content: &str,
    escape_html: bool,
) -> Result<String, AppError> {
    let template = ArticleTemplate::load(template_path)?;
    let html = template.render(metadata, content, escape_html);
    log::debug!("Composed article '{}': {} bytes", metadata.title, html.len());
    Ok(html)
}
