pub mod health;
pub mod navigations;
pub mod versions;
pub mod websites;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /websites                                      list, create
/// /websites/{id}                                 get, update, delete
/// /websites/{id}/publish                         publish draft tree (POST)
/// /websites/{id}/versions                        version history (GET)
/// /websites/{id}/versions/{version_id}/restore   rollback (POST)
/// /websites/{id}/navigations                     list, create
/// /versions/{id}                                 full snapshot (GET)
/// /navigations/{id}                              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(websites::router())
        .merge(versions::router())
        .merge(navigations::router())
}
