//! Handlers for the `/websites` resource, including publish.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pagesmith_core::error::CoreError;
use pagesmith_core::host::is_valid_subdomain;
use pagesmith_core::types::DbId;
use pagesmith_db::models::website::{CreateWebsite, UpdateWebsite, Website};
use pagesmith_db::repositories::WebsiteRepo;

use crate::error::{AppError, AppResult};
use crate::publish::{self, PublishOutcome, PublishRequest};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/websites
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWebsite>,
) -> AppResult<(StatusCode, Json<DataResponse<Website>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if !is_valid_subdomain(&input.subdomain) {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid subdomain (lowercase letters, digits, and inner hyphens only)",
            input.subdomain
        )));
    }
    if let Some(settings) = &input.settings {
        if !settings.is_object() {
            return Err(AppError::BadRequest("settings must be an object".into()));
        }
    }

    let website = WebsiteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: website })))
}

/// GET /api/v1/websites
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Website>>>> {
    let websites = WebsiteRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: websites }))
}

/// GET /api/v1/websites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Website>>> {
    let website = WebsiteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id,
        }))?;
    Ok(Json(DataResponse { data: website }))
}

/// PUT /api/v1/websites/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWebsite>,
) -> AppResult<Json<DataResponse<Website>>> {
    if let Some(Some(domain)) = &input.custom_domain {
        // Stored normalized so resolver equality matches work; reject
        // anything that is not a bare lowercase host.
        if domain.is_empty() || domain != &domain.to_ascii_lowercase() || domain.contains([':', '/', ' '])
        {
            return Err(AppError::BadRequest(format!(
                "'{domain}' is not a valid custom domain"
            )));
        }
    }
    if let Some(settings) = &input.settings {
        if !settings.is_object() {
            return Err(AppError::BadRequest("settings must be an object".into()));
        }
    }

    let website = WebsiteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id,
        }))?;
    Ok(Json(DataResponse { data: website }))
}

/// DELETE /api/v1/websites/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = WebsiteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id,
        }))
    }
}

/// POST /api/v1/websites/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PublishRequest>,
) -> AppResult<Json<DataResponse<PublishOutcome>>> {
    let outcome = publish::publish(&state.pool, &state.registry, id, input).await?;
    Ok(Json(DataResponse { data: outcome }))
}
