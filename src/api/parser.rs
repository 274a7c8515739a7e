// src/api/parser.rs
//! Turns raw Notion responses into domain values.
//!
//! Non-success responses become `AppError::NotionService` carrying the raw
//! body. Successful list responses are read record by record: entries that
//! cannot be read are skipped with a warning, and blocks never fail (see
//! `Block::from`).

use super::client::ApiResponse;
use super::responses::{ListResponse, NotionErrorBody};
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, Entry};

/// Parses a list response, or maps a non-success status to an error.
pub fn parse_list_response(result: ApiResponse<String>) -> Result<ListResponse, AppError> {
    if !result.status.is_success() {
        return Err(service_error(result));
    }

    serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", result.url, e);
        AppError::MalformedResponse(format!(
            "{} from {}: {}",
            e,
            result.url,
            preview(&result.data)
        ))
    })
}

/// Parses a database query response into entries.
pub fn parse_entries_response(result: ApiResponse<String>) -> Result<Vec<Entry>, AppError> {
    let response = parse_list_response(result)?;
    if response.has_more {
        log::warn!("Query returned more results than one response holds; only the first batch is used");
    }

    Ok(response
        .results
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Entry>(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable database entry: {}", e);
                None
            }
        })
        .collect())
}

/// Parses a block-children response into blocks.
pub fn parse_blocks_response(result: ApiResponse<String>) -> Result<Vec<Block>, AppError> {
    let response = parse_list_response(result)?;
    Ok(response.results.iter().map(Block::from).collect())
}

/// Builds the error for a non-success response, classifying the Notion
/// error code when the body carries one.
fn service_error(result: ApiResponse<String>) -> AppError {
    let code = serde_json::from_str::<NotionErrorBody>(&result.data)
        .map(|body| NotionErrorCode::from_api_response(&body.code))
        .unwrap_or_else(|_| NotionErrorCode::from_http_status(result.status.as_u16()));

    AppError::NotionService {
        code,
        endpoint: result.url,
        status: result.status,
        body: result.data,
    }
}

fn preview(body: &str) -> String {
    const PREVIEW_CHARS: usize = crate::constants::ERROR_BODY_PREVIEW_LENGTH;
    if body.chars().count() > PREVIEW_CHARS {
        format!("{}...", body.chars().take(PREVIEW_CHARS).collect::<String>())
    } else {
        body.to_string()
    }
}
