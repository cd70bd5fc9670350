// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the astronomy picture service.

use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Base endpoint of the picture archive.
const ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// API key the service accepts for unauthenticated, rate-limited use.
pub const DEMO_KEY: &str = "DEMO_KEY";

/// Shared HTTP client for all service calls.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent("AstroLens/0.1.0")
        .build()
        .unwrap_or_default()
});

/// Raw reply from the picture service, before interpretation.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Whether the HTTP status was in the success range.
    pub success: bool,
    /// Reason phrase for the status (e.g. "Too Many Requests").
    pub status_text: String,
    /// Raw response body, normally JSON.
    pub body: String,
}

/// Builds the request URL for one archive date.
#[must_use]
pub fn request_url(api_key: &str, date: &str) -> String {
    format!("{ENDPOINT}?api_key={api_key}&date={date}")
}

/// Fetches the archive entry for `date`.
///
/// Every answered request produces an [`ApiResponse`], error statuses
/// included. Only transport failures (DNS, connect, TLS) surface as
/// [`Error::Http`].
pub async fn fetch_picture(api_key: &str, date: &str) -> Result<ApiResponse> {
    let url = request_url(api_key, date);

    let response = HTTP_CLIENT
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    let status = response.status();
    let status_text = status
        .canonical_reason()
        .map(String::from)
        .unwrap_or_else(|| status.as_u16().to_string());

    let body = response
        .text()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    Ok(ApiResponse {
        success: status.is_success(),
        status_text,
        body,
    })
}

/// Downloads the raw bytes behind a picture URL.
///
/// # Errors
///
/// Returns [`Error::Http`] when the transfer fails or the server answers
/// with a non-success status.
pub async fn fetch_image_bytes(url: &str) -> Result<Vec<u8>> {
    let response = HTTP_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    Ok(bytes.to_vec())
}
