//! HTTP route handlers.
//!
//! The route table is a single static entry: `GET /` served by
//! [`home::index`]. Requests matching no entry fall through to the
//! framework defaults (405 for a known path with the wrong method,
//! 404 otherwise).

pub mod home;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Creates the Axum router with the application's routes.
pub fn create_router(state: AppState) -> Router {
    Router::new().route("/", get(home::index)).with_state(state)
}
