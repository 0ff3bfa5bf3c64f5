//! Repository for the `websites` table.

use pagesmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::website::{CreateWebsite, UpdateWebsite, Website};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, owner_user_id, name, subdomain, custom_domain, \
    published_version_id, settings, created_at, updated_at";

/// Provides data access for websites, including the published-version
/// pointer flip that makes a version live.
pub struct WebsiteRepo;

impl WebsiteRepo {
    /// Create a new website. The subdomain must be unique; a conflict
    /// surfaces as a `uq_websites_subdomain` constraint violation.
    pub async fn create(pool: &PgPool, dto: &CreateWebsite) -> Result<Website, sqlx::Error> {
        let query = format!(
            "INSERT INTO websites (owner_user_id, name, subdomain, settings) \
             VALUES ($1, $2, $3, COALESCE($4, '{{}}'::jsonb)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Website>(&query)
            .bind(dto.owner_user_id)
            .bind(&dto.name)
            .bind(&dto.subdomain)
            .bind(&dto.settings)
            .fetch_one(pool)
            .await
    }

    /// List all websites, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Website>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM websites ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Website>(&query).fetch_all(pool).await
    }

    /// Find a website by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Website>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM websites WHERE id = $1");
        sqlx::query_as::<_, Website>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a website by its custom domain (stored normalized lowercase).
    pub async fn find_by_custom_domain(
        pool: &PgPool,
        domain: &str,
    ) -> Result<Option<Website>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM websites WHERE custom_domain = $1");
        sqlx::query_as::<_, Website>(&query)
            .bind(domain)
            .fetch_optional(pool)
            .await
    }

    /// Find a website by its platform subdomain label.
    pub async fn find_by_subdomain(
        pool: &PgPool,
        subdomain: &str,
    ) -> Result<Option<Website>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM websites WHERE subdomain = $1");
        sqlx::query_as::<_, Website>(&query)
            .bind(subdomain)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a website's name, custom domain, or settings.
    ///
    /// Uses `COALESCE` so only provided fields change. The custom domain
    /// is doubly optional: `Some(None)` clears it, outer `None` keeps it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateWebsite,
    ) -> Result<Option<Website>, sqlx::Error> {
        let custom_domain_provided = dto.custom_domain.is_some();
        let custom_domain_value = dto.custom_domain.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE websites SET \
                 name          = COALESCE($2, name), \
                 custom_domain = CASE WHEN $3 THEN $4 ELSE custom_domain END, \
                 settings      = COALESCE($5, settings), \
                 updated_at    = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Website>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(custom_domain_provided)
            .bind(custom_domain_value)
            .bind(&dto.settings)
            .fetch_optional(pool)
            .await
    }

    /// Atomically point a website at a version it owns.
    ///
    /// The ownership check runs inside the same single-row UPDATE, so a
    /// version belonging to another website can never be installed and
    /// concurrent publishes serialize on the row write (last writer
    /// wins). Returns the updated row, or `None` when the website is
    /// gone or the version is not one of its own.
    pub async fn set_published_version(
        pool: &PgPool,
        website_id: DbId,
        version_id: DbId,
    ) -> Result<Option<Website>, sqlx::Error> {
        let query = format!(
            "UPDATE websites SET \
                 published_version_id = $2, \
                 updated_at           = NOW() \
             WHERE id = $1 \
               AND EXISTS (SELECT 1 FROM versions WHERE id = $2 AND website_id = $1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Website>(&query)
            .bind(website_id)
            .bind(version_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a website and, by cascade, its versions, navigations, and
    /// audit entries. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM websites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
