//! `text` component: body copy, rendered as paragraphs.

use serde::Deserialize;

use super::heading::alignment;
use super::{parse_config, Component, RenderContext};
use crate::error::CoreError;
use crate::render::escape_html;

/// Config keys recognized by `text`.
///
/// | key     | default | meaning                                   |
/// |---------|---------|-------------------------------------------|
/// | `text`  | `""`    | body copy; blank lines separate paragraphs |
/// | `align` | `left`  | `left`, `center`, or `right`              |
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextConfig {
    text: String,
    align: Option<String>,
}

pub struct Text;

impl Component for Text {
    fn type_id(&self) -> &'static str {
        "text"
    }

    fn render(
        &self,
        config: &serde_json::Value,
        ctx: &RenderContext<'_>,
    ) -> Result<String, CoreError> {
        let config: TextConfig = parse_config(self.type_id(), config)?;
        let paragraphs: String = config
            .text
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .map(|p| format!("<p>{}</p>", escape_html(p.trim()).replace('\n', "<br>")))
            .collect();
        Ok(format!(
            "<div id=\"{id}\" class=\"ps-section\" style=\"text-align:{align}\">{paragraphs}</div>",
            id = escape_html(ctx.element_id),
            align = alignment(config.align.as_deref()),
        ))
    }
}
