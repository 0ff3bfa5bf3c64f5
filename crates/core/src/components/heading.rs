//! `heading` component: a section title.

use serde::Deserialize;

use super::{parse_config, Component, RenderContext};
use crate::error::CoreError;
use crate::render::escape_html;

/// Config keys recognized by `heading`.
///
/// | key     | default | meaning                         |
/// |---------|---------|---------------------------------|
/// | `text`  | `""`    | heading text                    |
/// | `level` | `2`     | heading level, clamped to 1..=6 |
/// | `align` | `left`  | `left`, `center`, or `right`    |
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeadingConfig {
    text: String,
    level: Option<u8>,
    align: Option<String>,
}

pub struct Heading;

impl Component for Heading {
    fn type_id(&self) -> &'static str {
        "heading"
    }

    fn render(
        &self,
        config: &serde_json::Value,
        ctx: &RenderContext<'_>,
    ) -> Result<String, CoreError> {
        let config: HeadingConfig = parse_config(self.type_id(), config)?;
        let level = config.level.unwrap_or(2).clamp(1, 6);
        let align = alignment(config.align.as_deref());
        Ok(format!(
            "<h{level} id=\"{id}\" class=\"ps-section\" style=\"text-align:{align}\">{text}</h{level}>",
            id = escape_html(ctx.element_id),
            text = escape_html(&config.text),
        ))
    }
}

/// Map an authored alignment to a CSS keyword; anything unrecognized
/// falls back to `left`.
pub(super) fn alignment(align: Option<&str>) -> &'static str {
    match align {
        Some("center") => "center",
        Some("right") => "right",
        _ => "left",
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render_one;
    use super::*;

    #[test]
    fn renders_text_at_default_level() {
        let html = render_one(&Heading, serde_json::json!({ "text": "Welcome" }));
        assert!(html.contains("<h2"));
        assert!(html.contains("Welcome"));
        assert!(html.contains("text-align:left"));
    }

    #[test]
    fn level_is_clamped() {
        let html = render_one(&Heading, serde_json::json!({ "text": "x", "level": 9 }));
        assert!(html.contains("<h6"));
        let html = render_one(&Heading, serde_json::json!({ "text": "x", "level": 0 }));
        assert!(html.contains("<h1"));
    }

    #[test]
    fn text_is_escaped() {
        let html = render_one(&Heading, serde_json::json!({ "text": "<b>hi</b>" }));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn unknown_alignment_falls_back_to_left() {
        let html = render_one(&Heading, serde_json::json!({ "text": "x", "align": "diagonal" }));
        assert!(html.contains("text-align:left"));
    }
}
