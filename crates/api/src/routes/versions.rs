//! Route definitions for version history and rollback.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::version;
use crate::state::AppState;

/// Version routes.
///
/// ```text
/// GET  /websites/{id}/versions                        -> list_for_website
/// GET  /versions/{id}                                 -> get_by_id
/// POST /websites/{id}/versions/{version_id}/restore   -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/websites/{id}/versions", get(version::list_for_website))
        .route("/versions/{id}", get(version::get_by_id))
        .route(
            "/websites/{id}/versions/{version_id}/restore",
            post(version::restore),
        )
}
