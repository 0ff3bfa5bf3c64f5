//! Repository for the `versions` table.
//!
//! Versions are immutable: there is no update method, and the currently
//! published version is protected from deletion by a `RESTRICT` foreign
//! key from `websites.published_version_id`.

use pagesmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::version::{CreateVersion, Version, VersionSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, website_id, pages, settings, created_by, created_at";

/// Column list for metadata-only history listings.
const SUMMARY_COLUMNS: &str =
    "id, created_by, created_at, jsonb_array_length(pages)::bigint AS page_count";

/// Provides create and read access to immutable content versions.
pub struct VersionRepo;

impl VersionRepo {
    /// Persist a brand-new version snapshot for a website.
    ///
    /// A missing website surfaces as a foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        website_id: DbId,
        dto: &CreateVersion,
    ) -> Result<Version, sqlx::Error> {
        let query = format!(
            "INSERT INTO versions (website_id, pages, settings, created_by) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Version>(&query)
            .bind(website_id)
            .bind(&dto.pages)
            .bind(&dto.settings)
            .bind(dto.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a version by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Version>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM versions WHERE id = $1");
        sqlx::query_as::<_, Version>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List version metadata for a website, newest first.
    pub async fn list_by_website(
        pool: &PgPool,
        website_id: DbId,
    ) -> Result<Vec<VersionSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM versions \
             WHERE website_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, VersionSummary>(&query)
            .bind(website_id)
            .fetch_all(pool)
            .await
    }

    /// Prune a website's version history down to its `keep` newest rows.
    ///
    /// The currently published version is always kept, whatever its age.
    /// Returns the number of rows deleted.
    pub async fn delete_unreferenced(
        pool: &PgPool,
        website_id: DbId,
        keep: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM versions \
             WHERE website_id = $1 \
               AND id NOT IN ( \
                   SELECT published_version_id FROM websites \
                   WHERE id = $1 AND published_version_id IS NOT NULL) \
               AND id NOT IN ( \
                   SELECT id FROM versions WHERE website_id = $1 \
                   ORDER BY created_at DESC, id DESC LIMIT $2)",
        )
        .bind(website_id)
        .bind(keep)
        .execute(pool)
        .await?;

        let deleted = result.rows_affected();
        if deleted > 0 {
            tracing::debug!(website_id, deleted, "pruned version history");
        }
        Ok(deleted)
    }
}
