//! Template metadata: page formats, canvas background, and grid configuration.
//!
//! A template is a named canvas with fixed physical dimensions. The engine
//! holds the open template's format and grid settings; element ownership is
//! composition at the persistence boundary (deleting a template cascades to
//! its elements server-side, not locally).

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use serde::{Deserialize, Serialize};

use crate::config::env_parse;
use crate::consts::{DEFAULT_GRID_SIZE, DEFAULT_SNAP_THRESHOLD};
use crate::element::{Element, TemplateId};

/// Fixed physical page dimensions for a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    A4,
    Letter,
    Legal,
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}

impl PageFormat {
    /// Page dimensions in PostScript points (width, height).
    #[must_use]
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::A4 => (595.0, 842.0),
            Self::Letter => (612.0, 792.0),
            Self::Legal => (612.0, 1008.0),
        }
    }
}

/// Grid configuration consumed by the engine. Owned by the host, not persisted
/// with the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid cell size in canvas units.
    pub size: f64,
    /// Master switch for grid behavior.
    pub enabled: bool,
    /// Whether grid lines are drawn.
    pub visible: bool,
    /// Whether dropped/moved coordinates snap to the grid.
    pub snap_to_grid: bool,
    /// Snap attraction distance in canvas units.
    pub snap_threshold: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            enabled: true,
            visible: true,
            snap_to_grid: false,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

impl GridConfig {
    /// Build a grid config from environment overrides, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            size: env_parse("DRAFTBOARD_GRID_SIZE", default.size),
            enabled: env_parse("DRAFTBOARD_GRID_ENABLED", default.enabled),
            visible: env_parse("DRAFTBOARD_GRID_VISIBLE", default.visible),
            snap_to_grid: env_parse("DRAFTBOARD_SNAP_TO_GRID", default.snap_to_grid),
            snap_threshold: env_parse("DRAFTBOARD_SNAP_THRESHOLD", default.snap_threshold),
        }
    }
}

/// A named canvas: fixed physical format, background, grid, and its elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier for this template.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Fixed physical dimensions.
    pub format: PageFormat,
    /// Canvas background as a CSS color string.
    pub canvas_background: String,
    /// Grid settings active when the template was last edited.
    pub grid: GridConfig,
    /// Elements owned by this template, as last hydrated.
    pub elements: Vec<Element>,
}
