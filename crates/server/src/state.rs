//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::sharepoint::{ListClient, ProfileClient, SharePointError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the SharePoint clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    contacts: ListClient,
    profiles: ProfileClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the SharePoint HTTP clients fail to build.
    pub fn new(config: ServerConfig) -> Result<Self, SharePointError> {
        let contacts = ListClient::new(&config.sharepoint)?;
        let profiles = ProfileClient::new(&config.sharepoint)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                contacts,
                profiles,
            }),
        })
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the contact list client.
    #[must_use]
    pub fn contacts(&self) -> &ListClient {
        &self.inner.contacts
    }

    /// Get a reference to the user profile client.
    #[must_use]
    pub fn profiles(&self) -> &ProfileClient {
        &self.inner.profiles
    }
}
