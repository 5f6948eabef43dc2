//! Handler for the root route.

use axum::extract::State;

use crate::state::AppState;

/// Root handler.
///
/// Returns the configured response body with a 200 status. Axum's `String`
/// responder supplies the `text/plain` content type.
pub async fn index(State(state): State<AppState>) -> String {
    state.config.response.body.clone()
}
