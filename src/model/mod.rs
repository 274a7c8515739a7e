mod block;
pub mod common;
pub mod properties;

pub use block::{Block, BlockVisitor, TextBlockContent, UnsupportedBlock};
pub use common::{join_plain_text, RichTextItem};
pub use properties::{DateValue, PropertyValue, SelectOption};

use crate::types::EntryId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of the content database, as returned by the query endpoint.
///
/// Properties keep their response order; only the title, date and
/// multi-select types are interpreted, see [`PropertyValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

impl Entry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            url: None,
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_page_record() {
        let entry: Entry = serde_json::from_value(json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "url": "https://www.notion.so/Hello-598337872cf94fdf8782e53db20768a5",
            "properties": {
                "Name": {"id": "title", "type": "title", "title": [{"plain_text": "Hello"}]},
                "Done": {"id": "x", "type": "checkbox", "checkbox": false}
            }
        }))
        .unwrap();

        assert_eq!(entry.id.as_str(), "59833787-2cf9-4fdf-8782-e53db20768a5");
        assert_eq!(
            entry.properties.keys().collect::<Vec<_>>(),
            vec!["Name", "Done"]
        );
        assert!(matches!(entry.property("Name"), Some(PropertyValue::Title(_))));
    }

    #[test]
    fn missing_properties_default_to_empty() {
        let entry: Entry = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert!(entry.properties.is_empty());
        assert!(entry.url.is_none());
    }
}
