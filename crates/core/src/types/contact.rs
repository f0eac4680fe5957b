//! Contact entry and enriched record types.
//!
//! Both types are created fresh on every aggregation run and are immutable
//! once constructed; nothing here is cached across runs.

use serde::{Deserialize, Serialize};

use crate::types::login::LoginIdentifier;

/// Reference to the site user behind a contact entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUserRef {
    pub user_id: i64,
    pub login: LoginIdentifier,
}

/// One row of the contact list.
///
/// Entries are fetched already ordered by `sort_order` ascending; the
/// pipeline carries the key through so consumers can re-derive the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListEntry {
    pub id: i64,
    pub title: String,
    pub contact_user: ContactUserRef,
    pub sort_order: i64,
    /// Free-form rich text, passed through to the record unmodified.
    pub additional_details: String,
}

/// A display-ready contact record, one per successfully enriched entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetailRecord {
    pub name: String,
    pub job_title: String,
    pub work_phone: String,
    pub mobile_phone: String,
    pub email: String,
    /// Profile photo URL, derived from the site base URL and the contact's
    /// email fragment rather than from profile data.
    pub image_url: String,
    pub sort_order: i64,
    pub additional_details: String,
}
