//! Handlers for website navigation lists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pagesmith_core::content::NavLink;
use pagesmith_core::error::CoreError;
use pagesmith_core::types::DbId;
use pagesmith_db::models::navigation::{CreateNavigation, Navigation, UpdateNavigation};
use pagesmith_db::repositories::{NavigationRepo, WebsiteRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject link payloads that are not an ordered `{label, href}` list
/// before they reach storage; renderers deserialize the same shape.
fn validate_links(links: &serde_json::Value) -> Result<(), AppError> {
    serde_json::from_value::<Vec<NavLink>>(links.clone())
        .map(|_| ())
        .map_err(|e| AppError::BadRequest(format!("links must be a list of {{label, href}}: {e}")))
}

/// POST /api/v1/websites/{id}/navigations
pub async fn create(
    State(state): State<AppState>,
    Path(website_id): Path<DbId>,
    Json(input): Json<CreateNavigation>,
) -> AppResult<(StatusCode, Json<DataResponse<Navigation>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if let Some(links) = &input.links {
        validate_links(links)?;
    }
    WebsiteRepo::find_by_id(&state.pool, website_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id: website_id,
        }))?;

    let navigation = NavigationRepo::create(&state.pool, website_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: navigation })))
}

/// GET /api/v1/websites/{id}/navigations
pub async fn list_for_website(
    State(state): State<AppState>,
    Path(website_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Navigation>>>> {
    WebsiteRepo::find_by_id(&state.pool, website_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id: website_id,
        }))?;

    let navigations = NavigationRepo::list_by_website(&state.pool, website_id).await?;
    Ok(Json(DataResponse { data: navigations }))
}

/// GET /api/v1/navigations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Navigation>>> {
    let navigation = NavigationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Navigation",
            id,
        }))?;
    Ok(Json(DataResponse { data: navigation }))
}

/// PUT /api/v1/navigations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNavigation>,
) -> AppResult<Json<DataResponse<Navigation>>> {
    if let Some(links) = &input.links {
        validate_links(links)?;
    }
    let navigation = NavigationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Navigation",
            id,
        }))?;
    Ok(Json(DataResponse { data: navigation }))
}

/// DELETE /api/v1/navigations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = NavigationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Navigation",
            id,
        }))
    }
}
