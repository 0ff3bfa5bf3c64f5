//! Submitted content tree validation.
//!
//! A publish submission is validated as a whole before anything is
//! persisted. Every violation is collected, not just the first, so the
//! editor can surface all problems in one round trip.

use std::collections::HashSet;

use serde::Serialize;

use crate::components::ComponentRegistry;
use crate::content::{Page, HOMEPAGE_SLUG};

/// A single field-level violation in a submitted tree.
///
/// `path` addresses the offending field in the submitted JSON
/// (`pages[2].slug`); `code` is a stable machine-readable identifier.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub path: String,
    pub code: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(path: String, code: &'static str, message: String) -> Self {
        Self {
            path,
            code,
            message,
        }
    }
}

/// Deep-validate a submitted page tree against the component registry.
///
/// Returns `Ok(())` for a publishable tree, or every violation found.
/// Checks, in order per page: id and name presence, slug shape, slug
/// uniqueness within the tree, element ids, element component types,
/// element config shape. Tree-level checks: non-empty page list and
/// homepage presence. A tree without a `/` page is rejected outright
/// rather than silently rewriting the first page.
pub fn validate_tree(
    pages: &[Page],
    registry: &ComponentRegistry,
) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if pages.is_empty() {
        violations.push(FieldViolation::new(
            "pages".to_string(),
            "empty_tree",
            "A website must contain at least one page".to_string(),
        ));
        return Err(violations);
    }

    let mut seen_slugs: HashSet<&str> = HashSet::new();

    for (i, page) in pages.iter().enumerate() {
        if page.id.trim().is_empty() {
            violations.push(FieldViolation::new(
                format!("pages[{i}].id"),
                "missing_id",
                format!("Page at position {i} has no id"),
            ));
        }
        if page.name.trim().is_empty() {
            violations.push(FieldViolation::new(
                format!("pages[{i}].name"),
                "missing_name",
                format!("Page at position {i} has no name"),
            ));
        }

        if !is_valid_slug(&page.slug) {
            violations.push(FieldViolation::new(
                format!("pages[{i}].slug"),
                "invalid_slug",
                format!(
                    "Slug '{}' must start with '/' and contain no whitespace",
                    page.slug
                ),
            ));
        } else if !seen_slugs.insert(&page.slug) {
            violations.push(FieldViolation::new(
                format!("pages[{i}].slug"),
                "duplicate_slug",
                format!("Duplicate slug '{}'", page.slug),
            ));
        }

        for (j, element) in page.elements.iter().enumerate() {
            if element.id.trim().is_empty() {
                violations.push(FieldViolation::new(
                    format!("pages[{i}].elements[{j}].id"),
                    "missing_id",
                    format!("Element at position {j} on page '{}' has no id", page.slug),
                ));
            }
            if !registry.contains(&element.component) {
                violations.push(FieldViolation::new(
                    format!("pages[{i}].elements[{j}].type"),
                    "unknown_component",
                    format!(
                        "Unknown component type '{}'. Known types: {}",
                        element.component,
                        registry.type_ids().join(", ")
                    ),
                ));
            }
            if !(element.config.is_object() || element.config.is_null()) {
                violations.push(FieldViolation::new(
                    format!("pages[{i}].elements[{j}].config"),
                    "invalid_config",
                    format!(
                        "Element config must be an object, got {}",
                        json_type_name(&element.config)
                    ),
                ));
            }
        }
    }

    if !pages.iter().any(|p| p.slug == HOMEPAGE_SLUG) {
        violations.push(FieldViolation::new(
            "pages".to_string(),
            "missing_homepage",
            format!("No page has the homepage slug '{HOMEPAGE_SLUG}'"),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// A slug must start with `/` and contain no whitespace.
fn is_valid_slug(slug: &str) -> bool {
    slug.starts_with('/') && !slug.chars().any(char::is_whitespace)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
