// src/lib.rs
//! notion2site library: renders a Notion database into static article pages
//! and keeps an index page's article list in sync.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `SiteConfig`, `Credentials`
//! - **Domain model**: `Entry`, `Block`, `PropertyValue`, `RichTextItem`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, parsers
//! - **Formatting**: `render_blocks`, `extract_metadata`, index splicing
//! - **Pipeline**: `SiteBuild` and its stage traits

mod api;
mod config;
mod constants;
mod error;

#[cfg(feature = "bench")]
pub mod formatting;
#[cfg(not(feature = "bench"))]
mod formatting;

#[cfg(feature = "bench")]
pub mod model;
#[cfg(not(feature = "bench"))]
mod model;

mod output;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    read_env_file, CommandLineInput, Credentials, EnvSource, FailurePolicy, ProcessEnv, SiteConfig,
};

// --- Domain Model ---
pub use crate::model::{
    join_plain_text, Block, BlockVisitor, DateValue, Entry, PropertyValue, RichTextItem,
    SelectOption, TextBlockContent, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{ApiBaseUrl, ApiKey, DatabaseId, EntryId};

// --- API Client ---
pub use crate::api::{
    client::{API_BASE_URL, NOTION_VERSION},
    parser::{parse_blocks_response, parse_entries_response, parse_list_response},
    ApiResponse, DatabaseQuery, ListResponse, NotionErrorBody, NotionHttpClient, NotionRepository,
    SelectFilter,
};

// --- Formatting ---
pub use crate::formatting::{
    escape_if, extract_metadata, format_date, render_article, render_block, render_blocks,
    render_text, splice_article_list, update_article_count, ArticleMetadata, ArticleTemplate,
    HtmlBlockRenderer, ListItemRenderer, RenderContext,
};

// --- Output ---
pub use crate::output::{
    article_filename, article_path, deliver, DeliveryTarget, ExecutionStats, OutputPlan,
    OutputReport,
};

// --- Pipeline ---
pub use crate::pipeline::{
    ArticleComposer, BuildReport, ComposedArticle, ContentSource, SiteBuild, SiteDelivery,
};

// --- Constants ---
pub use crate::constants::{
    ARTICLES_END_MARKER, ARTICLES_START_MARKER, ARTICLE_COUNT_PATTERN, DEFAULT_TOPIC, UNTITLED,
};
