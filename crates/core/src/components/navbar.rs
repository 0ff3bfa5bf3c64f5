//! `navbar` component: site-wide navigation menu.
//!
//! Consumes a named navigation list from the render context. A missing
//! list is not an error; the bar renders with the brand alone so a
//! half-configured site still serves.

use serde::Deserialize;

use super::{parse_config, Component, RenderContext};
use crate::error::CoreError;
use crate::render::escape_html;

/// The navigation list used when none is named in the config.
pub const DEFAULT_NAVIGATION: &str = "main";

/// Config keys recognized by `navbar`.
///
/// | key          | default       | meaning                             |
/// |--------------|---------------|-------------------------------------|
/// | `navigation` | `"main"`      | name of the website navigation list |
/// | `brand`      | site name     | text shown at the start of the bar  |
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NavbarConfig {
    navigation: Option<String>,
    brand: Option<String>,
}

pub struct Navbar;

impl Component for Navbar {
    fn type_id(&self) -> &'static str {
        "navbar"
    }

    fn render(
        &self,
        config: &serde_json::Value,
        ctx: &RenderContext<'_>,
    ) -> Result<String, CoreError> {
        let config: NavbarConfig = parse_config(self.type_id(), config)?;
        let name = config.navigation.as_deref().unwrap_or(DEFAULT_NAVIGATION);
        let brand = config
            .brand
            .as_deref()
            .or(ctx.settings.site_name.as_deref())
            .unwrap_or("");

        let mut html = format!(
            "<nav id=\"{id}\" class=\"ps-navbar\"><span class=\"ps-brand\"><a href=\"/\">{brand}</a></span>",
            id = escape_html(ctx.element_id),
            brand = escape_html(brand),
        );
        if let Some(links) = ctx.navigations.get(name) {
            for link in links {
                html.push_str(&format!(
                    "<a href=\"{href}\">{label}</a>",
                    href = escape_html(&link.href),
                    label = escape_html(&link.label),
                ));
            }
        }
        html.push_str("</nav>");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::super::test_support::render_with;
    use super::*;
    use crate::content::{GlobalSettings, NavLink};

    fn navigations() -> HashMap<String, Vec<NavLink>> {
        HashMap::from([(
            "main".to_string(),
            vec![
                NavLink {
                    label: "Home".to_string(),
                    href: "/".to_string(),
                },
                NavLink {
                    label: "About".to_string(),
                    href: "/about".to_string(),
                },
            ],
        )])
    }

    #[test]
    fn renders_links_from_the_default_navigation() {
        let html = render_with(
            &Navbar,
            serde_json::Value::Null,
            &GlobalSettings::default(),
            &navigations(),
        );
        assert!(html.contains("href=\"/about\""));
        assert!(html.contains(">About</a>"));
    }

    #[test]
    fn brand_falls_back_to_the_site_name() {
        let settings = GlobalSettings {
            site_name: Some("Acme".to_string()),
            ..Default::default()
        };
        let html = render_with(&Navbar, serde_json::Value::Null, &settings, &HashMap::new());
        assert!(html.contains(">Acme</a>"));
    }

    #[test]
    fn missing_navigation_list_still_renders_the_bar() {
        let html = render_with(
            &Navbar,
            serde_json::json!({ "navigation": "absent" }),
            &GlobalSettings::default(),
            &navigations(),
        );
        assert!(html.contains("ps-navbar"));
        assert!(!html.contains("/about"));
    }
}
