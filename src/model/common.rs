// src/model/common.rs
//! Building blocks shared by block and property records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One run of Notion rich text.
///
/// Only the flattened `plain_text` is kept; annotations and mentions have no
/// counterpart in the generated HTML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text item with no link.
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            href: None,
        }
    }

    /// Reads a rich text array leniently: a missing or non-array value is an
    /// empty run list, and a run without `plain_text` contributes no text.
    pub fn list_from_json(value: Option<&Value>) -> Vec<RichTextItem> {
        let Some(Value::Array(items)) = value else {
            return Vec::new();
        };

        items
            .iter()
            .map(|item| RichTextItem {
                plain_text: item
                    .get("plain_text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                href: item.get("href").and_then(Value::as_str).map(str::to_string),
            })
            .collect()
    }
}

/// Concatenates the plain text of every run, in order, with no separator.
pub fn join_plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}
