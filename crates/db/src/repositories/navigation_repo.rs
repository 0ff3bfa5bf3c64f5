//! Repository for the `navigations` table.

use pagesmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::navigation::{CreateNavigation, Navigation, UpdateNavigation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, website_id, name, links, created_at, updated_at";

/// Provides CRUD access to website navigation lists.
pub struct NavigationRepo;

impl NavigationRepo {
    /// Create a new navigation. Names are unique per website; a
    /// conflict surfaces as a `uq_navigations_website_name` violation.
    pub async fn create(
        pool: &PgPool,
        website_id: DbId,
        dto: &CreateNavigation,
    ) -> Result<Navigation, sqlx::Error> {
        let query = format!(
            "INSERT INTO navigations (website_id, name, links) \
             VALUES ($1, $2, COALESCE($3, '[]'::jsonb)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Navigation>(&query)
            .bind(website_id)
            .bind(&dto.name)
            .bind(&dto.links)
            .fetch_one(pool)
            .await
    }

    /// List all navigations for a website, ordered by name.
    pub async fn list_by_website(
        pool: &PgPool,
        website_id: DbId,
    ) -> Result<Vec<Navigation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM navigations WHERE website_id = $1 ORDER BY name");
        sqlx::query_as::<_, Navigation>(&query)
            .bind(website_id)
            .fetch_all(pool)
            .await
    }

    /// Find a navigation by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Navigation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM navigations WHERE id = $1");
        sqlx::query_as::<_, Navigation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a navigation.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateNavigation,
    ) -> Result<Option<Navigation>, sqlx::Error> {
        let query = format!(
            "UPDATE navigations SET \
                 name       = COALESCE($2, name), \
                 links      = COALESCE($3, links), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Navigation>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.links)
            .fetch_optional(pool)
            .await
    }

    /// Delete a navigation by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM navigations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
