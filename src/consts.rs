//! Shared numeric and color constants for the draftboard crate.

// ── History ─────────────────────────────────────────────────────

/// Maximum number of past snapshots retained for undo. Oldest are dropped.
pub const MAX_HISTORY: usize = 50;

// ── Element defaults ────────────────────────────────────────────

/// Offset applied to both axes when duplicating an element.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Default fill color for shape elements.
pub const DEFAULT_FILL: &str = "#D94B4B";

/// Default stroke color for shape elements.
pub const DEFAULT_STROKE: &str = "#1F1A17";

/// Default stroke width for shape elements, in canvas units.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Default text color.
pub const DEFAULT_TEXT_COLOR: &str = "#1F1A17";

/// Default font size for text elements, in points.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

// ── Grid ────────────────────────────────────────────────────────

/// Default grid cell size in canvas units.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Default snap threshold in canvas units.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 8.0;
