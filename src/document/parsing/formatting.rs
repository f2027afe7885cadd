//! Run property resolution
//!
//! This module reads bold, italic and underline from the `<w:rPr>` block of
//! a single run. Only direct formatting is honored; paragraph defaults and
//! style sheets are never consulted.

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::models::TextFormatting;
use super::scan::{attribute, open_tag_pattern};

static RUN_PROPERTIES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<w:rPr(?:\s[^>]*)?>(.*?)</w:rPr>").unwrap());

// Tracked formatting changes keep the previous properties in a nested
// `<w:rPr>`; only what precedes it is current.
const PROPERTY_CHANGE: &str = "<w:rPrChange";

static BOLD: Lazy<Regex> = Lazy::new(|| open_tag_pattern("w:b"));
static ITALIC: Lazy<Regex> = Lazy::new(|| open_tag_pattern("w:i"));
static UNDERLINE: Lazy<Regex> = Lazy::new(|| open_tag_pattern("w:u"));

/// Extract formatting information from a run block
pub(crate) fn resolve_run_formatting(run: &str) -> TextFormatting {
    let Some(properties) = RUN_PROPERTIES.captures(run).and_then(|caps| caps.get(1)) else {
        return TextFormatting::default();
    };
    let properties = properties.as_str();
    let properties = properties
        .find(PROPERTY_CHANGE)
        .map_or(properties, |change| &properties[..change]);

    TextFormatting {
        bold: toggle_is_on(properties, &BOLD),
        italic: toggle_is_on(properties, &ITALIC),
        underline: underline_is_on(properties),
    }
}

/// A toggle is on when present, unless `w:val` switches it off.
fn toggle_is_on(properties: &str, tag: &Regex) -> bool {
    match tag_attributes(properties, tag) {
        Some(attributes) => !matches!(attribute(attributes, "w:val"), Some("0" | "false")),
        None => false,
    }
}

/// Underline needs an explicit `w:val` that is not an off value.
fn underline_is_on(properties: &str) -> bool {
    tag_attributes(properties, &UNDERLINE)
        .and_then(|attributes| attribute(attributes, "w:val"))
        .is_some_and(|value| !matches!(value, "none" | "0" | "false"))
}

fn tag_attributes<'a>(properties: &'a str, tag: &Regex) -> Option<&'a str> {
    tag.captures(properties)
        .map(|caps| caps.get(1).map_or("", |attributes| attributes.as_str()))
}
