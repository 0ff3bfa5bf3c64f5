//! Handlers for version history and rollback.

use axum::extract::{Path, State};
use axum::Json;
use pagesmith_core::error::CoreError;
use pagesmith_core::types::DbId;
use pagesmith_db::models::version::{Version, VersionSummary};
use pagesmith_db::repositories::{VersionRepo, WebsiteRepo};

use crate::error::{AppError, AppResult};
use crate::publish::{self, PublishOutcome, RestoreRequest};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/websites/{id}/versions
pub async fn list_for_website(
    State(state): State<AppState>,
    Path(website_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<VersionSummary>>>> {
    WebsiteRepo::find_by_id(&state.pool, website_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id: website_id,
        }))?;

    let summaries = VersionRepo::list_by_website(&state.pool, website_id).await?;
    Ok(Json(DataResponse { data: summaries }))
}

/// GET /api/v1/versions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Version>>> {
    let version = VersionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Version",
            id,
        }))?;
    Ok(Json(DataResponse { data: version }))
}

/// POST /api/v1/websites/{id}/versions/{version_id}/restore
pub async fn restore(
    State(state): State<AppState>,
    Path((website_id, version_id)): Path<(DbId, DbId)>,
    body: Option<Json<RestoreRequest>>,
) -> AppResult<Json<DataResponse<PublishOutcome>>> {
    let actor = body.and_then(|Json(req)| req.actor);
    let outcome = publish::restore(&state.pool, website_id, version_id, actor).await?;
    Ok(Json(DataResponse { data: outcome }))
}
