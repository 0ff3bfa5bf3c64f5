//! Route definitions for website navigation lists.

use axum::routing::get;
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Navigation routes.
///
/// ```text
/// GET    /websites/{id}/navigations -> list_for_website
/// POST   /websites/{id}/navigations -> create
/// GET    /navigations/{id}          -> get_by_id
/// PUT    /navigations/{id}          -> update
/// DELETE /navigations/{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/websites/{id}/navigations",
            get(navigation::list_for_website).post(navigation::create),
        )
        .route(
            "/navigations/{id}",
            get(navigation::get_by_id)
                .put(navigation::update)
                .delete(navigation::delete),
        )
}
