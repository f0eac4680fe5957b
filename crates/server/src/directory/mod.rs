//! Contact directory aggregation pipeline.
//!
//! One aggregation run fetches the ordered contact entries, fans out one
//! profile lookup per entry concurrently, merges each entry with its profile
//! into a display-ready record, and returns the surviving records ordered by
//! their sort key. Runs are independent; nothing is cached between them.

mod enrich;

pub use enrich::enrich;

use contact_directory_core::{ContactDetailRecord, ContactListEntry, LoginIdentifier, PropertyBag};
use futures::future::join_all;
use thiserror::Error;

/// Provides the contact entries, ordered by `sort_order` ascending at the
/// source.
pub trait ContactSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch_contact_entries(
        &self,
    ) -> impl Future<Output = Result<Vec<ContactListEntry>, Self::Error>> + Send;
}

/// Resolves one login identifier into a profile property bag.
pub trait ProfileSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get_properties_for(
        &self,
        login: &LoginIdentifier,
    ) -> impl Future<Output = Result<PropertyBag, Self::Error>> + Send;
}

/// Errors that fail an entire aggregation run.
///
/// A single entry's failed profile lookup is deliberately not represented
/// here: it is logged and the entry is dropped while the run continues.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The contact list fetch failed; no profile lookups were attempted.
    #[error("contact list fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Load the enriched contact directory.
///
/// Every entry's enrichment runs concurrently with its siblings; the fan-out
/// is unbounded because the contact list is manually curated and small. A
/// failed enrichment drops that entry and the run continues; a failed list
/// fetch fails the whole run before any lookup is issued.
///
/// The returned records are sorted by `sort_order` ascending regardless of
/// lookup completion order.
///
/// # Errors
///
/// Returns [`DirectoryError::Fetch`] if the contact list cannot be fetched.
pub async fn load_directory<C, P>(
    contacts: &C,
    profiles: &P,
    site_url: &str,
) -> Result<Vec<ContactDetailRecord>, DirectoryError>
where
    C: ContactSource,
    P: ProfileSource,
{
    let entries = contacts
        .fetch_contact_entries()
        .await
        .map_err(|e| DirectoryError::Fetch(Box::new(e)))?;
    tracing::debug!(count = entries.len(), "fetched contact entries");

    let outcomes = join_all(
        entries
            .iter()
            .map(|entry| enrich(entry, profiles, site_url)),
    )
    .await;

    let mut records = Vec::with_capacity(entries.len());
    for (entry, outcome) in entries.iter().zip(outcomes) {
        match outcome {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::warn!(
                    entry_id = entry.id,
                    login = %entry.contact_user.login,
                    error = %error,
                    "profile lookup failed, contact dropped"
                );
            }
        }
    }

    records.sort_by_key(|record| record.sort_order);
    Ok(records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use contact_directory_core::{ContactUserRef, NO_MOBILE_PHONE_FOUND, NO_PHONE_FOUND};

    use super::*;

    const SITE_URL: &str = "https://contoso.sharepoint.com/sites/intranet";

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct MockError(&'static str);

    struct MockContacts {
        entries: Vec<ContactListEntry>,
        fail: bool,
    }

    impl ContactSource for MockContacts {
        type Error = MockError;

        async fn fetch_contact_entries(&self) -> Result<Vec<ContactListEntry>, MockError> {
            if self.fail {
                Err(MockError("list fetch failed"))
            } else {
                Ok(self.entries.clone())
            }
        }
    }

    struct MockProfiles {
        bags: HashMap<String, PropertyBag>,
        calls: AtomicUsize,
    }

    impl MockProfiles {
        fn new(bags: HashMap<String, PropertyBag>) -> Self {
            Self {
                bags,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ProfileSource for MockProfiles {
        type Error = MockError;

        async fn get_properties_for(
            &self,
            login: &LoginIdentifier,
        ) -> Result<PropertyBag, MockError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bags
                .get(login.as_str())
                .cloned()
                .ok_or(MockError("profile lookup failed"))
        }
    }

    fn entry(id: i64, sort_order: i64, login: &str) -> ContactListEntry {
        ContactListEntry {
            id,
            title: format!("Contact {id}"),
            contact_user: ContactUserRef {
                user_id: id + 100,
                login: LoginIdentifier::new(login),
            },
            sort_order,
            additional_details: format!("<p>details {id}</p>"),
        }
    }

    fn bag(pairs: &[(&str, &str)]) -> PropertyBag {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[tokio::test]
    async fn test_records_sorted_by_sort_order() {
        // Entries arrive with sort orders 2 then 1; Bob (1) must come first.
        let contacts = MockContacts {
            entries: vec![entry(1, 2, "x|a@x.com"), entry(2, 1, "x|b@x.com")],
            fail: false,
        };
        let profiles = MockProfiles::new(HashMap::from([
            ("x|a@x.com".to_owned(), bag(&[("PreferredName", "Alice")])),
            ("x|b@x.com".to_owned(), bag(&[("PreferredName", "Bob")])),
        ]));

        let records = load_directory(&contacts, &profiles, SITE_URL).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Bob");
        assert_eq!(records[0].sort_order, 1);
        assert_eq!(records[1].name, "Alice");
        assert_eq!(records[1].sort_order, 2);
    }

    #[tokio::test]
    async fn test_failed_enrichment_drops_entry_only() {
        let contacts = MockContacts {
            entries: vec![
                entry(1, 1, "x|a@x.com"),
                entry(2, 2, "x|missing@x.com"),
                entry(3, 3, "x|c@x.com"),
            ],
            fail: false,
        };
        let profiles = MockProfiles::new(HashMap::from([
            ("x|a@x.com".to_owned(), bag(&[("PreferredName", "Alice")])),
            ("x|c@x.com".to_owned(), bag(&[("PreferredName", "Carol")])),
        ]));

        let records = load_directory(&contacts, &profiles, SITE_URL).await.unwrap();

        // The failing entry is excluded, siblings survive, no duplicates.
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[1].name, "Carol");
        assert_eq!(profiles.call_count(), 3);
    }

    #[tokio::test]
    async fn test_all_enrichments_failing_yields_empty_directory() {
        let contacts = MockContacts {
            entries: vec![entry(1, 1, "x|a@x.com"), entry(2, 2, "x|b@x.com")],
            fail: false,
        };
        let profiles = MockProfiles::new(HashMap::new());

        let records = load_directory(&contacts, &profiles, SITE_URL).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_without_lookups() {
        let contacts = MockContacts {
            entries: vec![],
            fail: true,
        };
        let profiles = MockProfiles::new(HashMap::new());

        let result = load_directory(&contacts, &profiles, SITE_URL).await;

        assert!(matches!(result, Err(DirectoryError::Fetch(_))));
        assert_eq!(profiles.call_count(), 0);
    }

    #[tokio::test]
    async fn test_record_fields_merged_from_entry_and_profile() {
        let contacts = MockContacts {
            entries: vec![entry(1, 5, "i:0#.f|membership|jane.doe@example.com")],
            fail: false,
        };
        let profiles = MockProfiles::new(HashMap::from([(
            "i:0#.f|membership|jane.doe@example.com".to_owned(),
            bag(&[
                ("PreferredName", "Jane Doe"),
                ("Title", "Engineer"),
                ("WorkPhone", "+1 555 0100"),
                ("WorkEmail", "jane.doe@example.com"),
            ]),
        )]));

        let records = load_directory(&contacts, &profiles, SITE_URL).await.unwrap();
        let record = &records[0];

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.job_title, "Engineer");
        assert_eq!(record.work_phone, "+1 555 0100");
        assert_eq!(record.mobile_phone, NO_MOBILE_PHONE_FOUND);
        assert_eq!(record.email, "jane.doe@example.com");
        assert_eq!(
            record.image_url,
            format!("{SITE_URL}/_layouts/15/userphoto.aspx?size=L&accountname=jane.doe@example.com")
        );
        assert_eq!(record.sort_order, 5);
        assert_eq!(record.additional_details, "<p>details 1</p>");
    }

    #[tokio::test]
    async fn test_empty_profile_gets_phone_fallbacks() {
        let contacts = MockContacts {
            entries: vec![entry(1, 1, "x|a@x.com")],
            fail: false,
        };
        let profiles = MockProfiles::new(HashMap::from([(
            "x|a@x.com".to_owned(),
            bag(&[]),
        )]));

        let records = load_directory(&contacts, &profiles, SITE_URL).await.unwrap();
        let record = &records[0];

        assert_eq!(record.name, "");
        assert_eq!(record.work_phone, NO_PHONE_FOUND);
        assert_eq!(record.mobile_phone, NO_MOBILE_PHONE_FOUND);
        assert_eq!(record.email, "");
    }

    #[tokio::test]
    async fn test_repeat_runs_are_deterministic() {
        let contacts = MockContacts {
            entries: vec![entry(1, 2, "x|a@x.com"), entry(2, 1, "x|b@x.com")],
            fail: false,
        };
        let profiles = MockProfiles::new(HashMap::from([
            ("x|a@x.com".to_owned(), bag(&[("PreferredName", "Alice")])),
            ("x|b@x.com".to_owned(), bag(&[("PreferredName", "Bob")])),
        ]));

        let first = load_directory(&contacts, &profiles, SITE_URL).await.unwrap();
        let second = load_directory(&contacts, &profiles, SITE_URL).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_ties_preserve_entry_order() {
        // Equal sort keys keep source order; the sort is stable.
        let contacts = MockContacts {
            entries: vec![entry(1, 1, "x|a@x.com"), entry(2, 1, "x|b@x.com")],
            fail: false,
        };
        let profiles = MockProfiles::new(HashMap::from([
            ("x|a@x.com".to_owned(), bag(&[("PreferredName", "Alice")])),
            ("x|b@x.com".to_owned(), bag(&[("PreferredName", "Bob")])),
        ]));

        let records = load_directory(&contacts, &profiles, SITE_URL).await.unwrap();
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[1].name, "Bob");
    }

    #[tokio::test]
    async fn test_enrich_propagates_lookup_failure() {
        let profiles = MockProfiles::new(HashMap::new());
        let result = enrich(&entry(1, 1, "x|a@x.com"), &profiles, SITE_URL).await;
        assert!(result.is_err());
    }
}
