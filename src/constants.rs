// src/constants.rs
//! Domain constants that define the fixed contracts of the site build.
//!
//! Each constant is named for the concept it pins down: the property names
//! read from the database, the placeholders in the article template, and
//! the literal fragments of the index page that get rewritten.

// ---------------------------------------------------------------------------
// Database properties
// ---------------------------------------------------------------------------

/// Title property of every entry.
pub const TITLE_PROPERTY: &str = "Name";

/// Date property; its `start` value is shown on the article and in the index.
pub const DATE_PROPERTY: &str = "Date";

/// Multi-select property holding the entry's topic tags.
pub const TOPICS_PROPERTY: &str = "Type";

/// Shown when an entry has no title.
pub const UNTITLED: &str = "Untitled";

/// The single topic used when an entry has none.
pub const DEFAULT_TOPIC: &str = "General";

/// Separator of the topic line in the article header.
pub const TOPIC_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Article template
// ---------------------------------------------------------------------------

pub const TITLE_PLACEHOLDER: &str = "{{ title }}";
pub const DATE_PLACEHOLDER: &str = "{{ date }}";
pub const TOPIC_PLACEHOLDER: &str = "{{ topic }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ content }}";

// ---------------------------------------------------------------------------
// Index page
// ---------------------------------------------------------------------------

/// Opening marker of the generated article list.
pub const ARTICLES_START_MARKER: &str = "<!-- ARTICLES_START -->";

/// Closing marker of the generated article list.
pub const ARTICLES_END_MARKER: &str = "<!-- ARTICLES_END -->";

/// The article count display, matched by pattern and rewritten to `(N)`.
pub const ARTICLE_COUNT_PATTERN: &str =
    r#"<p class="text-104"><span class="text-rgb-30-30-30">\(\d+\)</span></p>"#;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_TEMPLATE_FILE: &str = "article_template.html";
pub const DEFAULT_INDEX_FILE: &str = "index.html";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment key of the Notion integration token.
pub const TOKEN_ENV_KEY: &str = "NOTION_TOKEN";

/// Environment key of the content database id.
pub const DATABASE_ID_ENV_KEY: &str = "DATABASE_ID";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
