// src/api/client.rs
//! Shared HTTP plumbing for the service clients.
//!
//! Response bodies are always read to completion before any decision is
//! made about them, so error paths can quote what the service actually
//! said.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::AppError;
use reqwest::Response;

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

/// Truncates a response body for inclusion in error messages and logs.
/// Service error pages can run to many kilobytes of HTML.
pub fn body_preview(body: &str) -> String {
    if body.chars().count() <= ERROR_BODY_PREVIEW_LENGTH {
        return body.to_string();
    }
    let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
    format!("{}...", cut)
}
