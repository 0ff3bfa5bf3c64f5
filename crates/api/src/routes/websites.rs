//! Route definitions for the `/websites` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::website;
use crate::state::AppState;

/// Website routes.
///
/// ```text
/// GET    /websites               -> list
/// POST   /websites               -> create
/// GET    /websites/{id}          -> get_by_id
/// PUT    /websites/{id}          -> update
/// DELETE /websites/{id}          -> delete
/// POST   /websites/{id}/publish  -> publish
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/websites", get(website::list).post(website::create))
        .route(
            "/websites/{id}",
            get(website::get_by_id)
                .put(website::update)
                .delete(website::delete),
        )
        .route("/websites/{id}/publish", post(website::publish))
}
