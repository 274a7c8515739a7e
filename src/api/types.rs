// src/api/types.rs
//! Request types for the database query endpoint.

use serde::Serialize;
use serde_json::{json, Value};

/// Equality filter on a `select` property, e.g. `State = Published`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFilter {
    pub property: String,
    pub equals: String,
}

/// Body of `POST databases/{id}/query`.
///
/// The default query has neither filter nor sort and serializes to `{}`,
/// which returns rows in the database's own order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseQuery {
    pub filter: Option<SelectFilter>,
    /// Property to sort by, newest first.
    pub sort_descending_by: Option<String>,
}

impl DatabaseQuery {
    pub fn to_body(&self) -> Value {
        let mut body = json!({});
        if let Some(filter) = &self.filter {
            body["filter"] = json!({
                "property": filter.property,
                "select": { "equals": filter.equals }
            });
        }
        if let Some(property) = &self.sort_descending_by {
            body["sorts"] = json!([{ "property": property, "direction": "descending" }]);
        }
        body
    }
}

impl Serialize for DatabaseQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_body().serialize(serializer)
    }
}
