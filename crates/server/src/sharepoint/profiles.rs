//! User profile lookup client.

use contact_directory_core::{LoginIdentifier, ProfileProperty, PropertyBag};
use serde::Deserialize;

use crate::config::SharePointConfig;
use crate::directory::ProfileSource;

use super::{SharePointError, build_http_client};

/// Client for the user profile service.
#[derive(Clone)]
pub struct ProfileClient {
    client: reqwest::Client,
    site_url: String,
}

impl ProfileClient {
    /// Create a new profile client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &SharePointConfig) -> Result<Self, SharePointError> {
        Ok(Self {
            client: build_http_client(config)?,
            site_url: config.site_url.clone(),
        })
    }
}

impl ProfileSource for ProfileClient {
    type Error = SharePointError;

    /// Fetch the profile property bag for one account.
    ///
    /// The lookup uses the full login identifier, not the derived email
    /// fragment; claims-encoded names are what the profile service keys on.
    async fn get_properties_for(
        &self,
        login: &LoginIdentifier,
    ) -> Result<PropertyBag, SharePointError> {
        let url = format!(
            "{}/_api/SP.UserProfiles.PeopleManager/GetPropertiesFor(accountName=@v)?@v='{}'",
            self.site_url,
            urlencoding::encode(login.as_str()),
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SharePointError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: UserProfileResponse = response
            .json()
            .await
            .map_err(|e| SharePointError::Parse(e.to_string()))?;

        Ok(PropertyBag::new(
            body.user_profile_properties
                .into_iter()
                .map(|property| ProfileProperty {
                    key: property.key,
                    value: property.value.unwrap_or_default(),
                })
                .collect(),
        ))
    }
}

// =============================================================================
// Wire types
// =============================================================================

/// Profile response as returned by `GetPropertiesFor`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UserProfileResponse {
    #[serde(default)]
    user_profile_properties: Vec<WireProperty>,
}

/// One key/value pair; `Value` is nullable for unset properties.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireProperty {
    key: String,
    #[serde(default)]
    value: Option<String>,
}
