//! User profile property bag and typed extraction.

use serde::{Deserialize, Serialize};

/// Profile property keys the directory reads.
pub mod keys {
    /// Display name of the user.
    pub const PREFERRED_NAME: &str = "PreferredName";
    /// Job title.
    pub const TITLE: &str = "Title";
    /// Desk phone number.
    pub const WORK_PHONE: &str = "WorkPhone";
    /// Mobile phone number.
    pub const CELL_PHONE: &str = "CellPhone";
    /// Work email address.
    pub const WORK_EMAIL: &str = "WorkEmail";
}

/// Fallback shown when a profile has no usable work phone.
pub const NO_PHONE_FOUND: &str = "No Phone Found";

/// Fallback shown when a profile has no usable mobile phone.
pub const NO_MOBILE_PHONE_FOUND: &str = "No Mobile Phone Found";

/// One key/value pair from the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub key: String,
    pub value: String,
}

/// An ordered collection of profile properties for one user.
///
/// The profile service guarantees neither the presence of any particular key
/// nor key uniqueness. Extraction scans the whole list in order, so when a
/// key appears more than once the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyBag(Vec<ProfileProperty>);

impl PropertyBag {
    /// Create a bag from a list of properties, preserving their order.
    #[must_use]
    pub const fn new(properties: Vec<ProfileProperty>) -> Self {
        Self(properties)
    }

    /// Returns the underlying properties in service order.
    #[must_use]
    pub fn properties(&self) -> &[ProfileProperty] {
        &self.0
    }

    /// Extract the value stored under `key`.
    ///
    /// Returns the empty string when the key is absent. Two keys substitute
    /// a fallback literal when no usable value is stored (absent key or
    /// empty value): [`keys::WORK_PHONE`] yields [`NO_PHONE_FOUND`] and
    /// [`keys::CELL_PHONE`] yields [`NO_MOBILE_PHONE_FOUND`]. All other keys
    /// return the stored value verbatim, including the empty string.
    ///
    /// Never fails; missing data degrades to the empty/fallback strings.
    #[must_use]
    pub fn extract(&self, key: &str) -> String {
        let mut value = "";
        for property in &self.0 {
            if property.key == key {
                value = &property.value;
            }
        }

        if value.is_empty() {
            match key {
                keys::WORK_PHONE => return NO_PHONE_FOUND.to_owned(),
                keys::CELL_PHONE => return NO_MOBILE_PHONE_FOUND.to_owned(),
                _ => {}
            }
        }

        value.to_owned()
    }
}

impl FromIterator<(String, String)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| ProfileProperty { key, value })
                .collect(),
        )
    }
}
