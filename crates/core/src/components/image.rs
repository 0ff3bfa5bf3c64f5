//! `image` component: a single image with an accessibility hint and an
//! optional caption.

use serde::Deserialize;

use super::{parse_config, Component, RenderContext};
use crate::error::CoreError;
use crate::render::{escape_html, safe_css_value};

/// Config keys recognized by `image`.
///
/// | key       | default  | meaning                                 |
/// |-----------|----------|-----------------------------------------|
/// | `src`     | required | image URL                               |
/// | `alt`     | `""`     | accessibility hint                      |
/// | `caption` | none     | figcaption text                         |
/// | `width`   | none     | CSS max-width (`480px`, `60%`)          |
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImageConfig {
    src: String,
    alt: String,
    caption: Option<String>,
    width: Option<String>,
}

pub struct Image;

impl Component for Image {
    fn type_id(&self) -> &'static str {
        "image"
    }

    fn render(
        &self,
        config: &serde_json::Value,
        ctx: &RenderContext<'_>,
    ) -> Result<String, CoreError> {
        let config: ImageConfig = parse_config(self.type_id(), config)?;
        let src = config.src.trim();
        if src.is_empty() {
            return Err(CoreError::Render {
                component: self.type_id().to_string(),
                message: "missing required 'src'".to_string(),
            });
        }
        if src.to_ascii_lowercase().starts_with("javascript:") {
            return Err(CoreError::Render {
                component: self.type_id().to_string(),
                message: "'src' must be an image URL".to_string(),
            });
        }

        let style = config
            .width
            .as_deref()
            .and_then(safe_css_value)
            .map(|w| format!(" style=\"max-width:{w}\""))
            .unwrap_or_default();
        let caption = config
            .caption
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(|c| format!("<figcaption>{}</figcaption>", escape_html(c)))
            .unwrap_or_default();

        Ok(format!(
            "<figure id=\"{id}\" class=\"ps-section\"><img src=\"{src}\" alt=\"{alt}\"{style}>{caption}</figure>",
            id = escape_html(ctx.element_id),
            src = escape_html(src),
            alt = escape_html(&config.alt),
        ))
    }
}
