//! Version entity model and DTOs.
//!
//! A version is an immutable snapshot of a website's full content tree.
//! There is deliberately no update DTO: edits always create a new row.

use pagesmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `versions` table.
///
/// `pages` holds the ordered page list exactly as validated at publish
/// time; `settings` is the global-settings snapshot the version was
/// published under.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: DbId,
    pub website_id: DbId,
    pub pages: serde_json::Value,
    pub settings: serde_json::Value,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// Metadata-only projection for history and rollback listings.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub id: DbId,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub page_count: i64,
}

/// DTO for creating a new version. Built by the publishing pipeline
/// after tree validation has passed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVersion {
    pub pages: serde_json::Value,
    pub settings: serde_json::Value,
    pub created_by: Option<DbId>,
}
