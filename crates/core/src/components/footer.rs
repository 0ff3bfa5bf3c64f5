//! `footer` component: page footer with optional navigation links.

use serde::Deserialize;

use super::navbar::DEFAULT_NAVIGATION;
use super::{parse_config, Component, RenderContext};
use crate::error::CoreError;
use crate::render::escape_html;

/// Config keys recognized by `footer`.
///
/// | key          | default           | meaning                              |
/// |--------------|-------------------|--------------------------------------|
/// | `text`       | `"© <site name>"` | footer line                          |
/// | `navigation` | `"main"`          | name of the website navigation list  |
/// | `showLinks`  | `false`           | whether to render the link row       |
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FooterConfig {
    text: Option<String>,
    navigation: Option<String>,
    show_links: bool,
}

pub struct Footer;

impl Component for Footer {
    fn type_id(&self) -> &'static str {
        "footer"
    }

    fn render(
        &self,
        config: &serde_json::Value,
        ctx: &RenderContext<'_>,
    ) -> Result<String, CoreError> {
        let config: FooterConfig = parse_config(self.type_id(), config)?;
        let text = match (&config.text, &ctx.settings.site_name) {
            (Some(text), _) => text.clone(),
            (None, Some(site_name)) => format!("\u{a9} {site_name}"),
            (None, None) => String::new(),
        };

        let mut links = String::new();
        if config.show_links {
            let name = config.navigation.as_deref().unwrap_or(DEFAULT_NAVIGATION);
            if let Some(list) = ctx.navigations.get(name) {
                links.push_str("<nav>");
                for link in list {
                    links.push_str(&format!(
                        "<a href=\"{href}\">{label}</a> ",
                        href = escape_html(&link.href),
                        label = escape_html(&link.label),
                    ));
                }
                links.push_str("</nav>");
            }
        }

        Ok(format!(
            "<footer id=\"{id}\" class=\"ps-footer\">{links}<p>{text}</p></footer>",
            id = escape_html(ctx.element_id),
            text = escape_html(&text),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::super::test_support::{render_one, render_with};
    use super::*;
    use crate::content::{GlobalSettings, NavLink};

    #[test]
    fn default_text_uses_the_site_name() {
        let settings = GlobalSettings {
            site_name: Some("Acme".to_string()),
            ..Default::default()
        };
        let html = render_with(&Footer, serde_json::Value::Null, &settings, &HashMap::new());
        assert!(html.contains("\u{a9} Acme"));
    }

    #[test]
    fn explicit_text_wins() {
        let html = render_one(&Footer, serde_json::json!({ "text": "All rights reserved" }));
        assert!(html.contains("All rights reserved"));
    }

    #[test]
    fn links_render_only_when_enabled() {
        let navigations = HashMap::from([(
            "main".to_string(),
            vec![NavLink {
                label: "About".to_string(),
                href: "/about".to_string(),
            }],
        )]);
        let hidden = render_with(
            &Footer,
            serde_json::Value::Null,
            &GlobalSettings::default(),
            &navigations,
        );
        assert!(!hidden.contains("/about"));

        let shown = render_with(
            &Footer,
            serde_json::json!({ "showLinks": true }),
            &GlobalSettings::default(),
            &navigations,
        );
        assert!(shown.contains("/about"));
    }
}
