//! Content tree shapes shared by the editor API, the version store, and
//! the renderer.
//!
//! A website's content is a list of [`Page`]s, each holding ordered
//! [`Element`]s. The whole tree is snapshotted verbatim into a version on
//! publish, so these types serialize to the exact JSON the editor submits.

use serde::{Deserialize, Serialize};

/// The slug every published version must route at its root.
pub const HOMEPAGE_SLUG: &str = "/";

/// One route within a version.
///
/// `id` is assigned by the editor and stays stable across edits so
/// later versions can be diffed against earlier ones. `slug` is stored
/// exactly as authored (leading `/`) for direct equality matching
/// against request paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

/// One component instance placed on a page.
///
/// `order` is a sort key, not a dense index: gaps and duplicates are
/// tolerated, and display order comes from a stable sort (ties keep the
/// original array position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub component: String,
    pub order: i64,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Site-wide settings, stored on the website and snapshotted into each
/// version so historical versions render with the settings they were
/// published under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub site_name: Option<String>,
    pub font_family: Option<String>,
    pub favicon_url: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

/// A single entry in a named navigation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Find the homepage (slug `/`) within a page list.
pub fn homepage(pages: &[Page]) -> Option<&Page> {
    pages.iter().find(|p| p.slug == HOMEPAGE_SLUG)
}

/// Find the page matching a request path.
///
/// Slugs are compared exactly; a trailing slash on the request path is
/// ignored (`/about/` matches `/about`) except for the root itself.
pub fn page_for_path<'a>(pages: &'a [Page], path: &str) -> Option<&'a Page> {
    let normalized = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    pages.iter().find(|p| p.slug == normalized)
}
