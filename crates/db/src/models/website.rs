//! Website entity model and DTOs.

use pagesmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `websites` table: one tenant's site identity.
///
/// `published_version_id` is `NULL` until the first publish; it only
/// ever moves through the publishing pipeline.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: DbId,
    pub owner_user_id: Option<DbId>,
    pub name: String,
    pub subdomain: String,
    pub custom_domain: Option<String>,
    pub published_version_id: Option<DbId>,
    pub settings: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new website.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsite {
    pub name: String,
    pub subdomain: String,
    pub owner_user_id: Option<DbId>,
    pub settings: Option<serde_json::Value>,
}

/// DTO for partially updating a website. All fields are optional.
///
/// `custom_domain` is doubly optional so a client can distinguish
/// "leave unchanged" (absent) from "clear the domain" (`null`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsite {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub custom_domain: Option<Option<String>>,
    pub settings: Option<serde_json::Value>,
}

/// Deserialize `null` as `Some(None)` instead of `None`, so an explicit
/// `"customDomain": null` clears the field while an absent key keeps it.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
