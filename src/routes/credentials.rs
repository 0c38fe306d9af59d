//! Handler for the credential handout route.

use axum::{extract::State, http::HeaderMap, Json};
use tracing::instrument;

use crate::credentials::CredentialRecord;
use crate::state::AppState;

/// Root path handler: log the inbound header set, then hand out the record.
///
/// The handler is infallible; every request receives the same record the
/// process was started with. The full header set is logged for diagnostics
/// before the response is produced.
#[instrument(name = "credentials::issue", skip_all)]
pub async fn issue(State(state): State<AppState>, headers: HeaderMap) -> Json<CredentialRecord> {
    let header_view: Vec<(&str, String)> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    tracing::info!(headers = ?header_view, "Credential request received");

    // TODO: validate the Authentication header against a configured broker
    // key before handing out the record
    Json(state.record.as_ref().clone())
}
