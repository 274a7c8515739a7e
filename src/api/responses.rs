// src/api/responses.rs
//! Wire shapes of Notion API responses.
//!
//! Result records stay as raw JSON here; turning them into domain values is
//! the parser's job, so that one malformed record cannot fail a whole list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List envelope shared by the query and block-children endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Error body Notion sends with a non-success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}
