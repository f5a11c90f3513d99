//! Advisory element validation.
//!
//! ERROR HANDLING
//! ==============
//! Validation never throws and never blocks a mutation — the canvas stays
//! editable with incomplete content. Issues are collected as a list for the
//! authoring UI to surface; the caller decides what to do with them.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementProps};

/// How strongly an issue should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The deliverable will render incorrectly or not at all.
    Error,
    /// The deliverable will render but is likely incomplete.
    Warning,
}

/// One advisory finding against a single element field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `position.width`.
    pub field: String,
    /// Human-readable description for the authoring UI.
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(field: &str, message: &str) -> Self {
        Self { field: field.to_owned(), message: message.to_owned(), severity: Severity::Error }
    }

    fn warning(field: &str, message: &str) -> Self {
        Self { field: field.to_owned(), message: message.to_owned(), severity: Severity::Warning }
    }
}

/// Check one element for missing required content and degenerate geometry.
#[must_use]
pub fn validate_element(element: &Element) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if element.position.width <= 0.0 {
        issues.push(ValidationIssue::error("position.width", "width must be positive"));
    }
    if element.position.height <= 0.0 {
        issues.push(ValidationIssue::error("position.height", "height must be positive"));
    }

    match &element.props {
        ElementProps::Text { content, font_size, .. } => {
            if content.is_empty() {
                issues.push(ValidationIssue::error("props.content", "text element has no content"));
            }
            if *font_size <= 0.0 {
                issues.push(ValidationIssue::warning("props.font_size", "font size should be positive"));
            }
        }
        ElementProps::Image { source, alt, .. } => {
            if source.is_empty() {
                issues.push(ValidationIssue::error("props.source", "image element has no source"));
            }
            if alt.is_empty() {
                issues.push(ValidationIssue::warning("props.alt", "image element has no alternative text"));
            }
        }
        ElementProps::Chart { series, .. } => {
            if series.is_empty() {
                issues.push(ValidationIssue::error("props.series", "chart element has no data series"));
            } else if series.iter().any(|s| s.values.is_empty()) {
                issues.push(ValidationIssue::warning("props.series", "chart has a series with no values"));
            }
        }
        ElementProps::Table { headers, rows, .. } => {
            if headers.is_empty() {
                issues.push(ValidationIssue::error("props.headers", "table element has no headers"));
            }
            if rows.is_empty() {
                issues.push(ValidationIssue::error("props.rows", "table element has no rows"));
            } else if rows.iter().any(|r| r.len() != headers.len()) {
                issues.push(ValidationIssue::warning("props.rows", "table row width differs from header count"));
            }
        }
        ElementProps::Shape { stroke_width, .. } => {
            if *stroke_width < 0.0 {
                issues.push(ValidationIssue::warning("props.stroke_width", "stroke width should not be negative"));
            }
        }
    }

    issues
}
