//! Contact directory route handlers.

use axum::{Json, extract::State};
use contact_directory_core::ContactDetailRecord;
use tracing::instrument;

use crate::directory;
use crate::error::Result;
use crate::state::AppState;

/// Serve the enriched contact directory.
///
/// GET /api/contacts
///
/// Records are ordered by their list sort key ascending. A contact whose
/// profile lookup failed is omitted from the response; the failure only
/// shows up in the logs.
#[instrument(skip(state))]
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactDetailRecord>>> {
    let records = directory::load_directory(
        state.contacts(),
        state.profiles(),
        &state.config().sharepoint.site_url,
    )
    .await?;

    tracing::info!(count = records.len(), "contact directory loaded");
    Ok(Json(records))
}
