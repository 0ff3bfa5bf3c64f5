//! Component registry and built-in component implementations.
//!
//! Each content block type is a [`Component`]: it owns its config schema
//! (a serde struct with defaults for absent keys) and its render logic.
//! The registry is the single source of truth mapping type identifiers
//! to components. It is built once at process start and never mutated,
//! so it can be shared across concurrent renders without locking.

mod button;
mod footer;
mod heading;
mod image;
mod navbar;
mod spacer;
mod text;

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::content::{GlobalSettings, NavLink};
use crate::error::CoreError;

pub use button::Button;
pub use footer::Footer;
pub use heading::Heading;
pub use image::Image;
pub use navbar::Navbar;
pub use spacer::Spacer;
pub use text::Text;

/// Site-wide context passed to every component render call.
pub struct RenderContext<'a> {
    /// The element's id, emitted as a stable DOM key.
    pub element_id: &'a str,
    /// Global settings of the version being rendered.
    pub settings: &'a GlobalSettings,
    /// The website's navigation lists, keyed by name.
    pub navigations: &'a HashMap<String, Vec<NavLink>>,
}

/// A renderable content block type.
pub trait Component: Send + Sync {
    /// The type identifier elements reference.
    fn type_id(&self) -> &'static str;

    /// Render an element's config payload into an HTML fragment.
    ///
    /// Implementations deserialize their own config, filling documented
    /// defaults for absent optional keys. Errors are isolated per
    /// element by the dispatcher; they never abort the page.
    fn render(
        &self,
        config: &serde_json::Value,
        ctx: &RenderContext<'_>,
    ) -> Result<String, CoreError>;
}

/// Immutable mapping from type identifier to component implementation.
pub struct ComponentRegistry {
    components: HashMap<&'static str, Box<dyn Component>>,
}

impl ComponentRegistry {
    /// Build the registry with all built-in components.
    pub fn builtin() -> Self {
        let mut registry = Self {
            components: HashMap::new(),
        };
        registry.register(Box::new(Heading));
        registry.register(Box::new(Text));
        registry.register(Box::new(Image));
        registry.register(Box::new(Button));
        registry.register(Box::new(Navbar));
        registry.register(Box::new(Footer));
        registry.register(Box::new(Spacer));
        registry
    }

    fn register(&mut self, component: Box<dyn Component>) {
        let type_id = component.type_id();
        let previous = self.components.insert(type_id, component);
        debug_assert!(previous.is_none(), "duplicate component type '{type_id}'");
    }

    /// Look up a component by its type identifier.
    pub fn resolve(&self, type_id: &str) -> Option<&dyn Component> {
        self.components.get(type_id).map(Box::as_ref)
    }

    /// Whether a type identifier is registered.
    pub fn contains(&self, type_id: &str) -> bool {
        self.components.contains_key(type_id)
    }

    /// All registered type identifiers, sorted for stable messages.
    pub fn type_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.components.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Deserialize a component config, treating an absent (`null`) payload
/// as all-defaults. Unrecognized keys are ignored.
fn parse_config<T>(type_id: &str, config: &serde_json::Value) -> Result<T, CoreError>
where
    T: DeserializeOwned + Default,
{
    if config.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(config.clone()).map_err(|e| CoreError::Render {
        component: type_id.to_string(),
        message: format!("invalid config: {e}"),
    })
}
