//! Audit entry model and DTO.
//!
//! Append-only publish/restore attribution. Entries are immutable once
//! created (no `updated_at`, no update DTO).

use pagesmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `audit_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: DbId,
    pub website_id: DbId,
    pub action: String,
    pub version_id: Option<DbId>,
    pub actor: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new audit entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuditEntry {
    pub website_id: DbId,
    pub action: String,
    pub version_id: Option<DbId>,
    pub actor: Option<DbId>,
}
