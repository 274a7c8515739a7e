// src/formatting/properties.rs
//! Extracts the display-ready title, date and topics of an entry.

use crate::constants::{
    DATE_PROPERTY, DEFAULT_TOPIC, TITLE_PROPERTY, TOPICS_PROPERTY, TOPIC_SEPARATOR, UNTITLED,
};
use crate::model::{join_plain_text, Entry, PropertyValue};
use chrono::NaiveDate;

/// The header fields of one article, shared by the article page and its
/// index list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMetadata {
    pub title: String,
    /// `DD.MM.YYYY`, the raw value when it is not a plain date, or empty.
    pub date: String,
    /// Never empty.
    pub topics: Vec<String>,
}

impl ArticleMetadata {
    /// The topics joined for the article header, e.g. `"Notes, Rust"`.
    pub fn topic_line(&self) -> String {
        self.topics.join(TOPIC_SEPARATOR)
    }
}

/// Reads title, date and topics from an entry's properties.
pub fn extract_metadata(entry: &Entry) -> ArticleMetadata {
    ArticleMetadata {
        title: extract_title(entry),
        date: extract_date(entry),
        topics: extract_topics(entry),
    }
}

fn extract_title(entry: &Entry) -> String {
    match entry.property(TITLE_PROPERTY) {
        Some(PropertyValue::Title(runs)) if !runs.is_empty() => join_plain_text(runs),
        _ => UNTITLED.to_string(),
    }
}

fn extract_date(entry: &Entry) -> String {
    let start = match entry.property(DATE_PROPERTY) {
        Some(PropertyValue::Date(Some(date))) => date.start.as_deref(),
        _ => None,
    };

    match start {
        Some(raw) if !raw.is_empty() => format_date(raw),
        _ => String::new(),
    }
}

fn extract_topics(entry: &Entry) -> Vec<String> {
    let topics: Vec<String> = match entry.property(TOPICS_PROPERTY) {
        Some(PropertyValue::MultiSelect(options)) => {
            options.iter().map(|option| option.name.clone()).collect()
        }
        _ => Vec::new(),
    };

    if topics.is_empty() {
        vec![DEFAULT_TOPIC.to_string()]
    } else {
        topics
    }
}

/// Formats a `YYYY-MM-DD` date as `DD.MM.YYYY`; any other string is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    if !is_iso_date_shape(raw) {
        return raw.to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Exactly four, two and two digits. chrono's `%Y` alone would also take
/// longer or signed years.
fn is_iso_date_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DateValue, RichTextItem, SelectOption};
    use crate::types::EntryId;
    use pretty_assertions::assert_eq;

    fn option(name: &str) -> SelectOption {
        SelectOption {
            name: name.to_string(),
        }
    }

    fn dated(start: &str) -> PropertyValue {
        PropertyValue::Date(Some(DateValue {
            start: Some(start.to_string()),
            end: None,
        }))
    }

    #[test]
    fn extracts_all_fields() {
        let entry = Entry::new(EntryId::new("abc").unwrap())
            .with_property(
                "Name",
                PropertyValue::Title(vec![
                    RichTextItem::plain_text("Hel"),
                    RichTextItem::plain_text("lo"),
                ]),
            )
            .with_property("Date", dated("2024-03-05"))
            .with_property(
                "Type",
                PropertyValue::MultiSelect(vec![option("Notes"), option("Rust")]),
            );

        let metadata = extract_metadata(&entry);
        assert_eq!(
            metadata,
            ArticleMetadata {
                title: "Hello".to_string(),
                date: "05.03.2024".to_string(),
                topics: vec!["Notes".to_string(), "Rust".to_string()],
            }
        );
        assert_eq!(metadata.topic_line(), "Notes, Rust");
    }

    #[test]
    fn empty_entry_gets_defaults() {
        let metadata = extract_metadata(&Entry::new(EntryId::new("abc").unwrap()));
        assert_eq!(metadata.title, "Untitled");
        assert_eq!(metadata.date, "");
        assert_eq!(metadata.topics, vec!["General".to_string()]);
        assert_eq!(metadata.topic_line(), "General");
    }

    #[test]
    fn empty_topics_default_to_general() {
        let entry = Entry::new(EntryId::new("abc").unwrap())
            .with_property("Type", PropertyValue::MultiSelect(vec![]));
        assert_eq!(extract_metadata(&entry).topics, vec!["General".to_string()]);
    }

    #[test]
    fn wrongly_typed_properties_are_treated_as_absent() {
        let entry = Entry::new(EntryId::new("abc").unwrap())
            .with_property("Name", PropertyValue::Select(Some(option("x"))))
            .with_property("Date", PropertyValue::Title(vec![]))
            .with_property("Type", PropertyValue::Select(Some(option("Notes"))));
        let metadata = extract_metadata(&entry);
        assert_eq!(metadata.title, "Untitled");
        assert_eq!(metadata.date, "");
        assert_eq!(metadata.topics, vec!["General".to_string()]);
    }

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_date("2024-03-05"), "05.03.2024");
        assert_eq!(format_date("1999-12-31"), "31.12.1999");
    }

    #[test]
    fn passes_through_non_dates() {
        for raw in ["2024-03-05T10:00:00.000Z", "yesterday", "2024-13-01", "05.03.2024"] {
            assert_eq!(format_date(raw), raw);
        }
    }

    #[test]
    fn only_four_digit_years_with_padded_fields_are_reformatted() {
        for raw in ["12024-03-05", "+2024-03-05", "2024-3-5", "2024-03-5", "-024-03-05"] {
            assert_eq!(format_date(raw), raw);
        }
        assert_eq!(format_date("0999-01-02"), "02.01.0999");
    }
}
