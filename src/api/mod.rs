// src/api/mod.rs
//! Notion API interaction: the two read-only calls the site build makes.
//!
//! Business logic depends on the [`NotionRepository`] trait, never on HTTP
//! details, so the pipeline can be driven by a fake in tests.

pub mod client;
pub mod parser;
mod responses;
mod types;

use crate::error::AppError;
use crate::model::{Block, Entry};
use crate::types::{DatabaseId, EntryId};

/// The ability to read entries and their content from a Notion database.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Lists the rows of `database`, in the order the query returns them.
    async fn query_entries(
        &self,
        database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<Vec<Entry>, AppError>;

    /// Lists the top-level content blocks of one entry page.
    async fn retrieve_children(&self, entry: &EntryId) -> Result<Vec<Block>, AppError>;
}

// Re-export the public interface
pub use client::{ApiResponse, NotionHttpClient};
pub use responses::{ListResponse, NotionErrorBody};
pub use types::{DatabaseQuery, SelectFilter};
