//! SharePoint REST clients.
//!
//! Two read-only clients cover the collaborators the directory pipeline
//! needs: [`ListClient`] queries the contact list and [`ProfileClient`]
//! resolves user profile property bags. Both speak the plain-JSON
//! (`odata=nometadata`) flavor of the REST API and convert wire structs into
//! the core domain types.

mod lists;
mod profiles;

pub use lists::ListClient;
pub use profiles::ProfileClient;

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::SharePointConfig;

/// Request timeout; a hung upstream call must not stall a directory render
/// indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when calling the SharePoint REST API.
#[derive(Debug, Error)]
pub enum SharePointError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or build the client.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Build the shared HTTP client with auth and accept headers preset.
pub(crate) fn build_http_client(
    config: &SharePointConfig,
) -> Result<reqwest::Client, SharePointError> {
    let mut headers = HeaderMap::new();

    let auth_value = format!("Bearer {}", config.api_token.expose_secret());
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&auth_value)
            .map_err(|e| SharePointError::Parse(format!("Invalid API token format: {e}")))?,
    );

    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json;odata=nometadata"),
    );

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    Ok(client)
}
