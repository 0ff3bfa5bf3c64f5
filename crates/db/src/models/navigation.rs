//! Navigation entity model and DTOs.

use pagesmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `navigations` table: a named, reusable ordered list
/// of links scoped to a website. Names are unique per website.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub id: DbId,
    pub website_id: DbId,
    pub name: String,
    /// Ordered `{ "label": ..., "href": ... }` pairs.
    pub links: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new navigation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNavigation {
    pub name: String,
    pub links: Option<serde_json::Value>,
}

/// DTO for partially updating a navigation. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNavigation {
    pub name: Option<String>,
    pub links: Option<serde_json::Value>,
}
