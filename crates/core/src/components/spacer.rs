//! `spacer` component: fixed vertical whitespace between sections.

use serde::Deserialize;

use super::{parse_config, Component, RenderContext};
use crate::error::CoreError;
use crate::render::escape_html;

const DEFAULT_HEIGHT: i64 = 32;
const MAX_HEIGHT: i64 = 512;

/// Config keys recognized by `spacer`.
///
/// | key      | default | meaning                          |
/// |----------|---------|----------------------------------|
/// | `height` | `32`    | height in px, clamped to 0..=512 |
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SpacerConfig {
    height: Option<i64>,
}

pub struct Spacer;

impl Component for Spacer {
    fn type_id(&self) -> &'static str {
        "spacer"
    }

    fn render(
        &self,
        config: &serde_json::Value,
        ctx: &RenderContext<'_>,
    ) -> Result<String, CoreError> {
        let config: SpacerConfig = parse_config(self.type_id(), config)?;
        let height = config.height.unwrap_or(DEFAULT_HEIGHT).clamp(0, MAX_HEIGHT);
        Ok(format!(
            "<div id=\"{id}\" style=\"height:{height}px\" aria-hidden=\"true\"></div>",
            id = escape_html(ctx.element_id),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render_one;
    use super::*;

    #[test]
    fn default_height() {
        let html = render_one(&Spacer, serde_json::Value::Null);
        assert!(html.contains("height:32px"));
    }

    #[test]
    fn height_is_clamped() {
        let html = render_one(&Spacer, serde_json::json!({ "height": 10_000 }));
        assert!(html.contains("height:512px"));
        let html = render_one(&Spacer, serde_json::json!({ "height": -4 }));
        assert!(html.contains("height:0px"));
    }
}
