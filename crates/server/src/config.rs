//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CONTACT_SITE_URL` - Absolute URL of the SharePoint site hosting the
//!   contact list (e.g., <https://contoso.sharepoint.com/sites/intranet>)
//! - `SHAREPOINT_API_TOKEN` - Bearer token for the SharePoint REST API
//!
//! ## Optional
//! - `CONTACT_LIST_TITLE` - Title of the contact list (default: Contact Us)
//! - `CONTACT_HOST` - Bind address (default: 127.0.0.1)
//! - `CONTACT_PORT` - Listen port (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// List title the original web part was built around.
const DEFAULT_LIST_TITLE: &str = "Contact Us";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Directory service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// SharePoint site and credentials
    pub sharepoint: SharePointConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// SharePoint REST API configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct SharePointConfig {
    /// Absolute site URL, normalized without a trailing slash
    pub site_url: String,
    /// Title of the contact list
    pub list_title: String,
    /// Bearer token for the REST API (server-side only)
    pub api_token: SecretString,
}

impl std::fmt::Debug for SharePointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharePointConfig")
            .field("site_url", &self.site_url)
            .field("list_title", &self.list_title)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CONTACT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CONTACT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CONTACT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CONTACT_PORT".to_string(), e.to_string()))?;

        let sharepoint = SharePointConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            sharepoint,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SharePointConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_site_url = get_required_env("CONTACT_SITE_URL")?;
        let site_url = normalize_site_url(&raw_site_url)
            .map_err(|e| ConfigError::InvalidEnvVar("CONTACT_SITE_URL".to_string(), e))?;

        Ok(Self {
            site_url,
            list_title: get_env_or_default("CONTACT_LIST_TITLE", DEFAULT_LIST_TITLE),
            api_token: get_required_secret("SHAREPOINT_API_TOKEN")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate an absolute site URL and strip any trailing slash.
///
/// The image URL and REST endpoints are built by appending absolute paths,
/// so a trailing slash would produce `//` in every request.
fn normalize_site_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if url.host_str().is_none() {
        return Err("site URL must have a host".to_string());
    }
    Ok(raw.trim_end_matches('/').to_string())
}
