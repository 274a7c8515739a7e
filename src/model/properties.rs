// src/model/properties.rs
//! Entry property values, read leniently from the query response.

use super::common::RichTextItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `date` property value. Notion sends `start` as either `YYYY-MM-DD` or
/// a full ISO timestamp; it is kept as the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateValue {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// One option of a `select` or `multi_select` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// The property types the site reads. Everything else is carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub enum PropertyValue {
    Title(Vec<RichTextItem>),
    Date(Option<DateValue>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Other { property_type: String },
}

impl PropertyValue {
    pub fn property_type(&self) -> &str {
        match self {
            PropertyValue::Title(_) => "title",
            PropertyValue::Date(_) => "date",
            PropertyValue::Select(_) => "select",
            PropertyValue::MultiSelect(_) => "multi_select",
            PropertyValue::Other { property_type } => property_type,
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        let property_type = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default();

        match property_type {
            "title" => PropertyValue::Title(RichTextItem::list_from_json(value.get("title"))),
            "date" => PropertyValue::Date(parse_date(value.get("date"))),
            "select" => PropertyValue::Select(value.get("select").and_then(parse_option)),
            "multi_select" => PropertyValue::MultiSelect(
                value
                    .get("multi_select")
                    .and_then(Value::as_array)
                    .map(|options| options.iter().filter_map(parse_option).collect())
                    .unwrap_or_default(),
            ),
            other => PropertyValue::Other {
                property_type: other.to_string(),
            },
        }
    }
}

fn parse_date(value: Option<&Value>) -> Option<DateValue> {
    let value = value?.as_object()?;
    let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
    Some(DateValue {
        start: field("start"),
        end: field("end"),
    })
}

fn parse_option(value: &Value) -> Option<SelectOption> {
    value
        .get("name")
        .and_then(Value::as_str)
        .map(|name| SelectOption {
            name: name.to_string(),
        })
}
