//! Contact list query client.

use contact_directory_core::{ContactListEntry, ContactUserRef, LoginIdentifier};
use serde::Deserialize;

use crate::config::SharePointConfig;
use crate::directory::ContactSource;

use super::{SharePointError, build_http_client};

/// Fields the directory needs from the list; `ContactName` is a person field
/// expanded into its user id and login name.
const SELECT_FIELDS: &str = "Id,Title,ContactName/Id,ContactName/Name,AdditionDetails,ContactOrder";

/// Client for the contact list REST endpoint.
#[derive(Clone)]
pub struct ListClient {
    client: reqwest::Client,
    site_url: String,
    list_title: String,
}

impl ListClient {
    /// Create a new list client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &SharePointConfig) -> Result<Self, SharePointError> {
        Ok(Self {
            client: build_http_client(config)?,
            site_url: config.site_url.clone(),
            list_title: config.list_title.clone(),
        })
    }
}

impl ContactSource for ListClient {
    type Error = SharePointError;

    /// Fetch all contact entries, ordered by `ContactOrder` ascending at the
    /// source.
    async fn fetch_contact_entries(&self) -> Result<Vec<ContactListEntry>, SharePointError> {
        let url = format!(
            "{}/_api/web/lists/getbytitle('{}')/items?$select={}&$orderby=ContactOrder asc&$expand=ContactName",
            self.site_url,
            urlencoding::encode(&self.list_title),
            SELECT_FIELDS,
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

        let body: ListItemsResponse = response
            .json()
            .await
            .map_err(|e| SharePointError::Parse(e.to_string()))?;

        Ok(body.value.into_iter().map(convert_entry).collect())
    }
}

/// Convert a wire list item into the domain entry.
fn convert_entry(item: ListItem) -> ContactListEntry {
    ContactListEntry {
        id: item.id,
        title: item.title.unwrap_or_default(),
        contact_user: ContactUserRef {
            user_id: item.contact_name.id,
            login: LoginIdentifier::new(item.contact_name.name),
        },
        sort_order: item.contact_order,
        additional_details: item.addition_details.unwrap_or_default(),
    }
}

// =============================================================================
// Wire types
// =============================================================================

/// Wrapper for the `odata=nometadata` items response.
#[derive(Debug, Deserialize)]
struct ListItemsResponse {
    value: Vec<ListItem>,
}

/// One list item as returned by the REST API.
///
/// `Title` and `AdditionDetails` are nullable in the list schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListItem {
    id: i64,
    #[serde(default)]
    title: Option<String>,
    contact_name: UserField,
    #[serde(default)]
    addition_details: Option<String>,
    contact_order: i64,
}

/// Expanded person field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UserField {
    id: i64,
    name: String,
}
