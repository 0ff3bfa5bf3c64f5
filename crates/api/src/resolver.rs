//! Host → website resolution for visitor requests.
//!
//! Pure reads: two indexed lookups plus the navigation fetch, safe to
//! run on every inbound request. A miss carries no internal identifiers
//! so the serving layer can only ever surface a generic not-found.

use std::collections::HashMap;

use pagesmith_core::content::NavLink;
use pagesmith_core::host::{normalize_host, subdomain_label};
use pagesmith_core::types::DbId;
use pagesmith_db::models::version::Version;
use pagesmith_db::models::website::Website;
use pagesmith_db::repositories::{NavigationRepo, VersionRepo, WebsiteRepo};
use pagesmith_db::DbPool;

/// Everything the rendering layer needs to serve one request.
pub struct ResolvedSite {
    pub website: Website,
    /// The currently published version, in full.
    pub version: Version,
    /// The website's navigation lists, keyed by name.
    pub navigations: HashMap<String, Vec<NavLink>>,
}

/// Resolve an inbound `Host` header to a website and its published
/// version.
///
/// Custom domains win over platform subdomains. Returns `None` when no
/// website matches or the matched website has nothing published yet.
pub async fn resolve(
    pool: &DbPool,
    platform_domain: &str,
    raw_host: &str,
) -> Result<Option<ResolvedSite>, sqlx::Error> {
    let host = normalize_host(raw_host);

    let website = match WebsiteRepo::find_by_custom_domain(pool, &host).await? {
        Some(website) => Some(website),
        None => match subdomain_label(&host, platform_domain) {
            Some(label) => WebsiteRepo::find_by_subdomain(pool, label).await?,
            None => None,
        },
    };

    let Some(website) = website else {
        return Ok(None);
    };
    let Some(version_id) = website.published_version_id else {
        return Ok(None);
    };
    // The RESTRICT foreign key keeps the referenced version alive, so a
    // missing row here means the pointer raced a cascade delete.
    let Some(version) = VersionRepo::find_by_id(pool, version_id).await? else {
        return Ok(None);
    };

    let navigations = load_navigations(pool, website.id).await?;

    Ok(Some(ResolvedSite {
        website,
        version,
        navigations,
    }))
}

/// Fetch a website's navigations as name → links. A row whose links
/// fail to parse is skipped with a warning rather than failing the
/// whole page view.
async fn load_navigations(
    pool: &DbPool,
    website_id: DbId,
) -> Result<HashMap<String, Vec<NavLink>>, sqlx::Error> {
    let rows = NavigationRepo::list_by_website(pool, website_id).await?;
    let mut navigations = HashMap::with_capacity(rows.len());
    for row in rows {
        match serde_json::from_value::<Vec<NavLink>>(row.links) {
            Ok(links) => {
                navigations.insert(row.name, links);
            }
            Err(err) => {
                tracing::warn!(
                    website_id,
                    navigation = %row.name,
                    error = %err,
                    "navigation links failed to parse, skipping"
                );
            }
        }
    }
    Ok(navigations)
}
