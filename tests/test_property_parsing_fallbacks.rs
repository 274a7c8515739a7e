//! Property extraction against recorded query responses, including records
//! with missing, empty and mistyped properties.

use notion2site::{extract_metadata, parse_entries_response, ApiResponse, ArticleMetadata};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

const DATABASE_QUERY: &str = include_str!("fixtures/api_responses/database_query.json");

fn metadata_from_fixture() -> Vec<(String, ArticleMetadata)> {
    let entries = parse_entries_response(ApiResponse {
        data: DATABASE_QUERY.to_string(),
        status: StatusCode::OK,
        url: "databases/db/query".to_string(),
    })
    .expect("fixture should parse");

    entries
        .iter()
        .map(|entry| (entry.id.as_str().to_string(), extract_metadata(entry)))
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn entry_without_id_is_skipped() {
    let ids: Vec<String> = metadata_from_fixture().into_iter().map(|(id, _)| id).collect();
    assert_eq!(
        ids,
        strings(&[
            "1f2e3d4c-0000-4000-8000-000000000001",
            "1f2e3d4c-0000-4000-8000-000000000002",
            "1f2e3d4c-0000-4000-8000-000000000003",
            "1f2e3d4c-0000-4000-8000-000000000004",
            "1f2e3d4c-0000-4000-8000-000000000005",
        ])
    );
}

#[test]
fn complete_entry_is_fully_extracted() {
    let fixture = metadata_from_fixture();
    let (_, metadata) = &fixture[0];
    assert_eq!(
        metadata,
        &ArticleMetadata {
            title: "Hello, world".to_string(),
            date: "05.03.2024".to_string(),
            topics: strings(&["Notes", "Rust"]),
        }
    );
    assert_eq!(metadata.topic_line(), "Notes, Rust");
}

#[test]
fn empty_properties_fall_back_to_defaults() {
    let fixture = metadata_from_fixture();
    let (_, metadata) = &fixture[1];
    assert_eq!(metadata.title, "Untitled");
    assert_eq!(metadata.date, "");
    assert_eq!(metadata.topics, strings(&["General"]));
}

#[test]
fn mistyped_properties_are_treated_as_absent() {
    let fixture = metadata_from_fixture();
    let (_, metadata) = &fixture[2];
    assert_eq!(metadata.title, "Untitled");
    assert_eq!(metadata.topics, strings(&["General"]));
}

#[test]
fn datetime_start_passes_through_unchanged() {
    let fixture = metadata_from_fixture();
    let (_, metadata) = &fixture[2];
    assert_eq!(metadata.date, "2024-03-05T10:00:00.000+00:00");
}

#[test]
fn entry_without_properties_uses_defaults() {
    let fixture = metadata_from_fixture();
    let (_, metadata) = &fixture[3];
    assert_eq!(
        metadata,
        &ArticleMetadata {
            title: "Untitled".to_string(),
            date: String::new(),
            topics: strings(&["General"]),
        }
    );
}

#[test]
fn partial_records_keep_what_is_readable() {
    let fixture = metadata_from_fixture();
    let (_, metadata) = &fixture[4];
    assert_eq!(metadata.title, "Partial");
    assert_eq!(metadata.date, "March 5th");
    assert_eq!(metadata.topics, strings(&["Kept"]));
}
