//! Per-entry contact enrichment.

use contact_directory_core::{ContactDetailRecord, ContactListEntry, keys};

use super::ProfileSource;

/// Profile photo endpoint, relative to the site URL.
const USER_PHOTO_PATH: &str = "/_layouts/15/userphoto.aspx?size=L&accountname=";

/// Merge one contact entry with its profile into a display-ready record.
///
/// The profile lookup is the single suspension point; everything else is a
/// synchronous transform. A lookup failure propagates to the caller
/// unchanged; no retry is attempted and no partial record is produced.
///
/// # Errors
///
/// Returns the profile source's error if the lookup fails.
pub async fn enrich<P: ProfileSource>(
    entry: &ContactListEntry,
    profiles: &P,
    site_url: &str,
) -> Result<ContactDetailRecord, P::Error> {
    let email = entry.contact_user.login.email_fragment();
    let image_url = image_url(site_url, email);

    let bag = profiles.get_properties_for(&entry.contact_user.login).await?;

    Ok(ContactDetailRecord {
        name: bag.extract(keys::PREFERRED_NAME),
        job_title: bag.extract(keys::TITLE),
        work_phone: bag.extract(keys::WORK_PHONE),
        mobile_phone: bag.extract(keys::CELL_PHONE),
        email: bag.extract(keys::WORK_EMAIL),
        image_url,
        sort_order: entry.sort_order,
        additional_details: entry.additional_details.clone(),
    })
}

/// Build the profile photo URL for an email fragment.
///
/// The assembled URL is percent-decoded as a whole, so encoded sequences
/// already present in the configured site URL are decoded along with the
/// account name. A fragment that fails to decode is served as assembled.
fn image_url(site_url: &str, email: &str) -> String {
    let assembled = format!("{site_url}{USER_PHOTO_PATH}{email}");
    match urlencoding::decode(&assembled) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => assembled,
    }
}
