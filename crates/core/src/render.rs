//! Element dispatch and page rendering.
//!
//! The renderer walks a page's elements in display order and dispatches
//! each one through the component registry. A single failing element
//! never takes the page down: failures are logged and replaced with a
//! visible placeholder, and rendering continues with the remaining
//! elements.

use std::collections::HashMap;

use crate::components::{ComponentRegistry, RenderContext};
use crate::content::{Element, GlobalSettings, NavLink, Page};

/// Escape text for safe interpolation into HTML bodies and
/// double-quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accept a user-supplied CSS value only if it is restricted to a safe
/// character set (no `;`, `:`, braces, or quotes that could escape the
/// declaration). Returns `None` for anything suspicious.
pub fn safe_css_value(value: &str) -> Option<&str> {
    let ok = !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, ' ' | '#' | ',' | '.' | '%' | '(' | ')' | '-' | '\'')
        });
    ok.then_some(value)
}

/// Stable-sort elements by their `order` key.
///
/// Ties keep the original array position, so duplicate order values are
/// tolerated rather than trusted to be dense or unique.
pub fn sort_elements(elements: &[Element]) -> Vec<&Element> {
    let mut sorted: Vec<&Element> = elements.iter().collect();
    sorted.sort_by_key(|e| e.order);
    sorted
}

/// Render a page's elements in display order, concatenating the HTML
/// fragments. Unknown component types and per-element render failures
/// produce visible placeholders and do not abort the remaining elements.
pub fn render_elements(
    elements: &[Element],
    settings: &GlobalSettings,
    navigations: &HashMap<String, Vec<NavLink>>,
    registry: &ComponentRegistry,
) -> String {
    let mut html = String::new();
    for element in sort_elements(elements) {
        let ctx = RenderContext {
            element_id: &element.id,
            settings,
            navigations,
        };
        let fragment = match registry.resolve(&element.component) {
            None => {
                tracing::warn!(
                    element_id = %element.id,
                    component = %element.component,
                    "skipping element with unregistered component type"
                );
                unsupported_placeholder(element)
            }
            Some(component) => match component.render(&element.config, &ctx) {
                Ok(fragment) => fragment,
                Err(err) => {
                    tracing::warn!(
                        element_id = %element.id,
                        component = %element.component,
                        error = %err,
                        "element failed to render, substituting placeholder"
                    );
                    error_placeholder(element)
                }
            },
        };
        html.push_str(&fragment);
        html.push('\n');
    }
    html
}

fn unsupported_placeholder(element: &Element) -> String {
    format!(
        "<div class=\"ps-placeholder\" data-element=\"{}\">Unsupported component: {}</div>",
        escape_html(&element.id),
        escape_html(&element.component)
    )
}

fn error_placeholder(element: &Element) -> String {
    format!(
        "<div class=\"ps-placeholder\" data-element=\"{}\">This section could not be displayed</div>",
        escape_html(&element.id)
    )
}

/// Minimal stylesheet shipped with every rendered page.
const BASE_STYLES: &str = "\
body{margin:0;line-height:1.5}\
.ps-button{display:inline-block;padding:12px 24px;border-radius:6px;text-decoration:none}\
.ps-navbar{display:flex;gap:16px;align-items:center;padding:16px 24px}\
.ps-navbar a{text-decoration:none;color:inherit}\
.ps-footer{padding:24px;text-align:center;opacity:.8}\
.ps-placeholder{padding:16px;margin:8px 0;border:1px dashed #c00;color:#c00;text-align:center}\
.ps-section{padding:8px 24px}";

/// Render a full HTML document for one page of a published version.
pub fn render_document(
    page: &Page,
    settings: &GlobalSettings,
    navigations: &HashMap<String, Vec<NavLink>>,
    registry: &ComponentRegistry,
) -> String {
    let site_name = settings.site_name.as_deref().unwrap_or("");
    let title = match &page.seo_title {
        Some(seo) => escape_html(seo),
        None if site_name.is_empty() => escape_html(&page.name),
        None => escape_html(&format!("{} | {}", page.name, site_name)),
    };

    let mut head = String::new();
    if let Some(description) = &page.seo_description {
        head.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    if let Some(favicon) = &settings.favicon_url {
        head.push_str(&format!(
            "<link rel=\"icon\" href=\"{}\">\n",
            escape_html(favicon)
        ));
    }

    let mut body_style = String::new();
    if let Some(font) = settings.font_family.as_deref().and_then(safe_css_value) {
        body_style.push_str(&format!("font-family:{font};"));
    }
    if let Some(bg) = settings
        .background_color
        .as_deref()
        .and_then(safe_css_value)
    {
        body_style.push_str(&format!("background-color:{bg};"));
    }
    if let Some(color) = settings.text_color.as_deref().and_then(safe_css_value) {
        body_style.push_str(&format!("color:{color};"));
    }

    let body = render_elements(&page.elements, settings, navigations, registry);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n{head}<style>{BASE_STYLES}</style>\n</head>\n\
         <body style=\"{body_style}\">\n{body}</body>\n</html>\n"
    )
}

/// The generic visitor-facing miss page. Deliberately bland: it must not
/// leak which lookup failed or any internal identifiers.
pub fn render_not_found() -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Not Found</title>\n<style>{BASE_STYLES}</style>\n</head>\n\
         <body>\n<div class=\"ps-section\" style=\"text-align:center;padding-top:20vh\">\n\
         <h1>404</h1>\n<p>This page could not be found.</p>\n</div>\n</body>\n</html>\n"
    )
}
