//! `button` component: a call-to-action link styled as a button.

use serde::Deserialize;

use super::heading::alignment;
use super::{parse_config, Component, RenderContext};
use crate::error::CoreError;
use crate::render::{escape_html, safe_css_value};

/// Config keys recognized by `button`.
///
/// | key               | default        | meaning                      |
/// |-------------------|----------------|------------------------------|
/// | `label`           | `"Learn more"` | button text                  |
/// | `href`            | `"#"`          | link target                  |
/// | `backgroundColor` | `#1a1a1a`      | CSS background color         |
/// | `textColor`       | `#ffffff`      | CSS text color               |
/// | `align`           | `left`         | `left`, `center`, or `right` |
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ButtonConfig {
    label: String,
    href: String,
    background_color: String,
    text_color: String,
    align: Option<String>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: "Learn more".to_string(),
            href: "#".to_string(),
            background_color: "#1a1a1a".to_string(),
            text_color: "#ffffff".to_string(),
            align: None,
        }
    }
}

pub struct Button;

impl Component for Button {
    fn type_id(&self) -> &'static str {
        "button"
    }

    fn render(
        &self,
        config: &serde_json::Value,
        ctx: &RenderContext<'_>,
    ) -> Result<String, CoreError> {
        let config: ButtonConfig = parse_config(self.type_id(), config)?;

        let href = config.href.trim();
        let href = if href.is_empty() || href.to_ascii_lowercase().starts_with("javascript:") {
            "#"
        } else {
            href
        };
        let background = safe_css_value(&config.background_color).unwrap_or("#1a1a1a");
        let color = safe_css_value(&config.text_color).unwrap_or("#ffffff");

        Ok(format!(
            "<div class=\"ps-section\" style=\"text-align:{align}\">\
             <a id=\"{id}\" class=\"ps-button\" href=\"{href}\" \
             style=\"background-color:{background};color:{color}\">{label}</a></div>",
            align = alignment(config.align.as_deref()),
            id = escape_html(ctx.element_id),
            href = escape_html(href),
            label = escape_html(&config.label),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render_one;
    use super::*;

    #[test]
    fn empty_config_renders_the_documented_defaults() {
        let html = render_one(&Button, serde_json::Value::Null);
        assert!(html.contains("Learn more"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("background-color:#1a1a1a"));
    }

    #[test]
    fn custom_label_href_and_colors() {
        let html = render_one(
            &Button,
            serde_json::json!({
                "label": "Buy now",
                "href": "/shop",
                "backgroundColor": "#0a0",
                "textColor": "#fff"
            }),
        );
        assert!(html.contains("Buy now"));
        assert!(html.contains("href=\"/shop\""));
        assert!(html.contains("background-color:#0a0"));
    }

    #[test]
    fn javascript_href_falls_back_to_hash() {
        let html = render_one(&Button, serde_json::json!({ "href": "javascript:alert(1)" }));
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn unsafe_colors_fall_back_to_defaults() {
        let html = render_one(
            &Button,
            serde_json::json!({ "backgroundColor": "red;width:100vw" }),
        );
        assert!(html.contains("background-color:#1a1a1a"));
    }
}
