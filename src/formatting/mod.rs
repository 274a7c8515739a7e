// src/formatting/mod.rs
//! Renders Notion entries into article pages and index list items.

// Sub-modules
pub mod article;
pub mod block_renderer;
pub mod index;
mod properties;
mod rich_text;

pub use self::article::{render_article, ArticleTemplate};
pub use self::block_renderer::{render_block, render_blocks, HtmlBlockRenderer, RenderContext};
pub use self::index::{splice_article_list, update_article_count, ListItemRenderer};
pub use self::properties::{extract_metadata, format_date, ArticleMetadata};
pub use self::rich_text::{escape_if, render_text};
