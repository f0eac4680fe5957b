//! HTTP route handlers.

mod contacts;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the service router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contacts", get(contacts::list_contacts))
}
