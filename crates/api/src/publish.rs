//! The publishing pipeline: the only paths by which a website's
//! published-version pointer moves.
//!
//! `publish` runs in two phases. The new version is persisted first;
//! only on success does the pointer flip, as a single ownership-guarded
//! row update. A failed validation or insert therefore never degrades
//! the live site, and visitors always see one version in full.
//! Concurrent publishes race on the pointer write and the last
//! successful writer wins; both versions stay retrievable.

use pagesmith_core::components::ComponentRegistry;
use pagesmith_core::content::{GlobalSettings, Page};
use pagesmith_core::error::CoreError;
use pagesmith_core::types::DbId;
use pagesmith_core::validation::validate_tree;
use pagesmith_db::models::audit::CreateAuditEntry;
use pagesmith_db::models::version::CreateVersion;
use pagesmith_db::models::website::Website;
use pagesmith_db::repositories::{AuditRepo, VersionRepo, WebsiteRepo};
use pagesmith_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A full draft tree submitted for publication.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub pages: Vec<Page>,
    #[serde(default)]
    pub global_settings: GlobalSettings,
    /// Optional actor reference recorded for audit; never blocks the
    /// publish (authentication is handled upstream).
    #[serde(default)]
    pub actor: Option<DbId>,
}

/// Optional body for a rollback request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreRequest {
    #[serde(default)]
    pub actor: Option<DbId>,
}

/// Result of a successful publish or restore.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOutcome {
    pub website_id: DbId,
    pub version_id: DbId,
    pub website: Website,
}

/// Validate a submitted tree, persist it as a new immutable version,
/// and flip the website's published pointer to it.
pub async fn publish(
    pool: &DbPool,
    registry: &ComponentRegistry,
    website_id: DbId,
    input: PublishRequest,
) -> AppResult<PublishOutcome> {
    // Fail fast on an unknown website so validation errors are not
    // reported against a site that does not exist.
    WebsiteRepo::find_by_id(pool, website_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id: website_id,
        }))?;

    validate_tree(&input.pages, registry).map_err(AppError::TreeInvalid)?;

    let version = VersionRepo::create(
        pool,
        website_id,
        &CreateVersion {
            pages: serde_json::to_value(&input.pages)
                .map_err(|e| AppError::InternalError(format!("serializing pages: {e}")))?,
            settings: serde_json::to_value(&input.global_settings)
                .map_err(|e| AppError::InternalError(format!("serializing settings: {e}")))?,
            created_by: input.actor,
        },
    )
    .await?;

    let website = WebsiteRepo::set_published_version(pool, website_id, version.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id: website_id,
        }))?;

    tracing::info!(
        website_id,
        version_id = version.id,
        actor = ?input.actor,
        "published new version"
    );
    record_audit(pool, website_id, "publish", version.id, input.actor).await;

    Ok(PublishOutcome {
        website_id,
        version_id: version.id,
        website,
    })
}

/// Roll a website back to an existing historical version.
///
/// The version must belong to the website; a foreign version id is
/// reported as not-found rather than revealing whose it is.
pub async fn restore(
    pool: &DbPool,
    website_id: DbId,
    version_id: DbId,
    actor: Option<DbId>,
) -> AppResult<PublishOutcome> {
    let version = VersionRepo::find_by_id(pool, version_id)
        .await?
        .filter(|v| v.website_id == website_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Version",
            id: version_id,
        }))?;

    let website = WebsiteRepo::set_published_version(pool, website_id, version.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Website",
            id: website_id,
        }))?;

    tracing::info!(website_id, version_id, actor = ?actor, "restored version");
    record_audit(pool, website_id, "restore", version_id, actor).await;

    Ok(PublishOutcome {
        website_id,
        version_id,
        website,
    })
}

/// Best-effort audit write: a failure is logged, never fatal.
async fn record_audit(
    pool: &DbPool,
    website_id: DbId,
    action: &str,
    version_id: DbId,
    actor: Option<DbId>,
) {
    let entry = CreateAuditEntry {
        website_id,
        action: action.to_string(),
        version_id: Some(version_id),
        actor,
    };
    if let Err(err) = AuditRepo::record(pool, &entry).await {
        tracing::warn!(website_id, action, error = %err, "audit entry was not recorded");
    }
}
