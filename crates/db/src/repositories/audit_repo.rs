//! Repository for the `audit_entries` table.

use pagesmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::audit::{AuditEntry, CreateAuditEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, website_id, action, version_id, actor, created_at";

/// Provides append and read access to the publish audit trail.
pub struct AuditRepo;

impl AuditRepo {
    /// Record a new audit entry.
    pub async fn record(pool: &PgPool, dto: &CreateAuditEntry) -> Result<AuditEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_entries (website_id, action, version_id, actor) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditEntry>(&query)
            .bind(dto.website_id)
            .bind(&dto.action)
            .bind(dto.version_id)
            .bind(dto.actor)
            .fetch_one(pool)
            .await
    }

    /// List a website's audit entries, newest first.
    pub async fn list_by_website(
        pool: &PgPool,
        website_id: DbId,
    ) -> Result<Vec<AuditEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_entries \
             WHERE website_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, AuditEntry>(&query)
            .bind(website_id)
            .fetch_all(pool)
            .await
    }
}
