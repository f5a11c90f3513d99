//! Element model: kinds, typed property variants, and sparse updates.
//!
//! This module defines the core data types describing what sits on a proposal
//! canvas (`Element`, `ElementKind`), the typed per-kind property union
//! (`ElementProps`), and a sparse-update type for incremental edits
//! (`PartialElement`). Every site that reads properties matches exhaustively
//! on the active variant; there is no untyped property bag, with the single
//! exception of the open-ended `config`/`styling` values carried by charts
//! and tables.
//!
//! Data flows into this layer from the gateway (JSON deserialization) and
//! from the engine (mutations). The host renderer reads elements via the
//! store's z-ordered accessors to determine draw order.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    DEFAULT_FILL, DEFAULT_FONT_SIZE, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH, DEFAULT_TEXT_COLOR,
};

/// Unique identifier for a canvas element.
pub type ElementId = Uuid;

/// Unique identifier for the template (document) owning an element.
pub type TemplateId = Uuid;

/// The kind of a canvas element. Determines the active [`ElementProps`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Flowing text block.
    Text,
    /// Raster or vector image referenced by source URL.
    Image,
    /// Data chart rendered from one or more series.
    Chart,
    /// Tabular data with a header row.
    Table,
    /// Geometric shape block.
    Shape,
}

/// Error returned when a drag payload tag does not name a known element kind.
#[derive(Debug, thiserror::Error)]
#[error("unknown element kind tag: {0}")]
pub struct UnknownKind(String);

impl FromStr for ElementKind {
    type Err = UnknownKind;

    /// Parse the drag/drop payload tag carried by the host toolbox.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "chart" => Ok(Self::Chart),
            "table" => Ok(Self::Table),
            "shape" => Ok(Self::Shape),
            other => Err(UnknownKind(other.to_owned())),
        }
    }
}

impl ElementKind {
    /// Lowercase tag used on the wire and in drag payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Chart => "chart",
            Self::Table => "table",
            Self::Shape => "shape",
        }
    }

    /// Default bounding-box size for elements dropped from the toolbox.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Text => (200.0, 50.0),
            Self::Image => (200.0, 150.0),
            Self::Chart => (320.0, 200.0),
            Self::Table => (320.0, 160.0),
            Self::Shape => (150.0, 100.0),
        }
    }
}

/// Horizontal alignment of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// How an image is fitted into its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    /// Scale to fit entirely inside the box, preserving aspect ratio.
    Contain,
    /// Scale to cover the box, cropping overflow.
    Cover,
    /// Stretch to fill the box exactly.
    Fill,
}

/// Chart presentation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Area,
}

/// Geometric shape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Triangle,
    Line,
}

/// One named series of chart values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    /// Legend label for the series.
    pub name: String,
    /// Data points in presentation order.
    pub values: Vec<f64>,
}

/// Typed per-kind element properties. The serde tag mirrors [`ElementKind`],
/// so the wire shape is `{"type": "text", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementProps {
    Text {
        /// Text content; empty content is flagged by validation.
        content: String,
        /// Font size in points.
        font_size: f64,
        /// CSS color string.
        color: String,
        /// Horizontal alignment within the box.
        align: TextAlign,
    },
    Image {
        /// Image source URL or data URI.
        source: String,
        /// Alternative text for the deliverable.
        alt: String,
        /// Fit mode within the bounding box.
        fit: ImageFit,
    },
    Chart {
        /// Chart presentation family.
        chart_kind: ChartKind,
        /// Data series; at least one is expected by validation.
        series: Vec<DataSeries>,
        /// Open-ended renderer configuration (axis labels, palette, ...).
        config: serde_json::Value,
    },
    Table {
        /// Header row labels.
        headers: Vec<String>,
        /// Body rows; each row holds one cell per header.
        rows: Vec<Vec<String>>,
        /// Open-ended styling (borders, stripes, ...).
        styling: serde_json::Value,
    },
    Shape {
        /// Geometric shape family.
        shape_kind: ShapeKind,
        /// Fill color as a CSS color string.
        fill: String,
        /// Stroke color as a CSS color string.
        stroke: String,
        /// Stroke width in canvas units.
        stroke_width: f64,
    },
}

impl ElementProps {
    /// The kind whose variant is currently active.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text { .. } => ElementKind::Text,
            Self::Image { .. } => ElementKind::Image,
            Self::Chart { .. } => ElementKind::Chart,
            Self::Table { .. } => ElementKind::Table,
            Self::Shape { .. } => ElementKind::Shape,
        }
    }

    /// Default properties applied when an element is created without any.
    #[must_use]
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => Self::Text {
                content: String::new(),
                font_size: DEFAULT_FONT_SIZE,
                color: DEFAULT_TEXT_COLOR.to_owned(),
                align: TextAlign::Left,
            },
            ElementKind::Image => Self::Image {
                source: String::new(),
                alt: String::new(),
                fit: ImageFit::Contain,
            },
            ElementKind::Chart => Self::Chart {
                chart_kind: ChartKind::Bar,
                series: Vec::new(),
                config: serde_json::json!({}),
            },
            ElementKind::Table => Self::Table {
                headers: Vec::new(),
                rows: Vec::new(),
                styling: serde_json::json!({}),
            },
            ElementKind::Shape => Self::Shape {
                shape_kind: ShapeKind::Rectangle,
                fill: DEFAULT_FILL.to_owned(),
                stroke: DEFAULT_STROKE.to_owned(),
                stroke_width: DEFAULT_STROKE_WIDTH,
            },
        }
    }
}

/// Axis-aligned bounding box of an element in canvas coordinates.
///
/// `x`/`y` may be any finite value (negative is legal mid-drag);
/// `width`/`height` are expected positive — violations are surfaced by
/// validation rather than rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center (`x + width / 2`).
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center (`y + height / 2`).
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// A canvas element as stored in the document and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, stable for the element's lifetime.
    pub id: ElementId,
    /// The template this element belongs to.
    pub template_id: TemplateId,
    /// Element kind; immutable after creation.
    pub kind: ElementKind,
    /// Bounding box in canvas coordinates.
    pub position: Position,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
    /// Monotonically increasing edit counter used for reconciliation.
    pub version: i64,
    /// Typed per-kind properties.
    pub props: ElementProps,
}

/// Sparse update for an element. Only present fields are applied.
///
/// A `props` patch replaces the active variant wholesale and must match the
/// element's kind; a mismatched variant is rejected by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialElement {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New z-index, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    /// New version counter, if being set by a gateway echo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Replacement properties, if being updated. Must match the element kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<ElementProps>,
}

impl PartialElement {
    /// A patch that only moves the element.
    #[must_use]
    pub fn moved_to(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    /// True when no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.z_index.is_none()
            && self.version.is_none()
            && self.props.is_none()
    }
}
