//! Login identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A user login identifier as stored in the contact list's person field.
///
/// Claims-aware list stores encode account names as composites such as
/// `i:0#.f|membership|jane.doe@example.com`. The plain email address is the
/// segment after the last `|`; an identifier with no delimiter is already a
/// plain account name.
///
/// ## Examples
///
/// ```
/// use contact_directory_core::LoginIdentifier;
///
/// let login = LoginIdentifier::new("i:0#.f|membership|jane.doe@example.com");
/// assert_eq!(login.email_fragment(), "jane.doe@example.com");
///
/// let plain = LoginIdentifier::new("jane.doe@example.com");
/// assert_eq!(plain.email_fragment(), "jane.doe@example.com");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LoginIdentifier(String);

impl LoginIdentifier {
    /// Create a `LoginIdentifier` from a raw account name.
    ///
    /// No validation is applied; the list store is the source of truth for
    /// what a valid identifier looks like.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the full identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the email fragment: the substring after the last `|`, or the
    /// whole identifier when it contains no delimiter.
    #[must_use]
    pub fn email_fragment(&self) -> &str {
        self.0.rsplit('|').next().unwrap_or(&self.0)
    }

    /// Consumes the `LoginIdentifier` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LoginIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LoginIdentifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LoginIdentifier {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for LoginIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
