//! Public serving: every request that matches no management route is a
//! visitor page view.
//!
//! Misses of any kind (unknown host, nothing published, unknown path)
//! render the same generic not-found page so nothing internal leaks.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use pagesmith_core::content::{page_for_path, GlobalSettings, Page};
use pagesmith_core::render::{render_document, render_not_found};

use crate::resolver;
use crate::state::AppState;

/// Router fallback: resolve the `Host` header, match the request path
/// against the published version's page slugs, and render.
pub async fn serve_page(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let Some(host) = headers.get(header::HOST).and_then(|v| v.to_str().ok()) else {
        tracing::debug!("visitor request without a Host header");
        return miss();
    };

    let resolved =
        match resolver::resolve(&state.pool, &state.config.platform_domain, host).await {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::error!(error = %err, "host resolution failed");
                return server_error();
            }
        };
    let Some(site) = resolved else {
        tracing::debug!(host, "no published site for host");
        return miss();
    };

    // Snapshots were validated at publish time; a parse failure here
    // means the stored row was corrupted out of band.
    let pages: Vec<Page> = match serde_json::from_value(site.version.pages) {
        Ok(pages) => pages,
        Err(err) => {
            tracing::error!(
                website_id = site.website.id,
                version_id = site.version.id,
                error = %err,
                "published snapshot failed to deserialize"
            );
            return server_error();
        }
    };
    let settings: GlobalSettings =
        serde_json::from_value(site.version.settings).unwrap_or_else(|err| {
            tracing::warn!(
                website_id = site.website.id,
                version_id = site.version.id,
                error = %err,
                "settings snapshot failed to deserialize, using defaults"
            );
            GlobalSettings::default()
        });

    let Some(page) = page_for_path(&pages, uri.path()) else {
        tracing::debug!(host, path = uri.path(), "no page for path");
        return miss();
    };

    let html = render_document(page, &settings, &site.navigations, &state.registry);
    Html(html).into_response()
}

fn miss() -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <title>Error</title></head><body><h1>Something went wrong</h1>\
             <p>Please try again shortly.</p></body></html>"
                .to_string(),
        ),
    )
        .into_response()
}
