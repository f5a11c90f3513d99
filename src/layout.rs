//! Stateless geometric algorithms over element position snapshots.
//!
//! Everything in this module is a pure function: callers pass `(id, position)`
//! snapshots taken from the store and get recomputed positions back. The
//! engine decides what to apply; nothing here touches stored state.
//!
//! Alignment needs at least two items and distribution at least three; both
//! return `None` below those thresholds so the caller can treat the call as a
//! reported no-op rather than an error.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, Position};

/// Alignment edge or center line shared by the aligned set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Axis along which elements are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Align every item's edge or center to a reference value computed over the
/// whole set. Returns `None` when fewer than two items are given.
///
/// Reference values: `left` → min x, `right` → max right edge, `center` →
/// mean of horizontal centers, `top` → min y, `bottom` → max bottom edge,
/// `middle` → mean of vertical centers. Sizes never change.
#[must_use]
pub fn align(items: &[(ElementId, Position)], alignment: Alignment) -> Option<Vec<(ElementId, Position)>> {
    if items.len() < 2 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = items.len() as f64;
    let reference = match alignment {
        Alignment::Left => items.iter().map(|(_, p)| p.x).fold(f64::INFINITY, f64::min),
        Alignment::Right => items.iter().map(|(_, p)| p.right()).fold(f64::NEG_INFINITY, f64::max),
        Alignment::Center => items.iter().map(|(_, p)| p.center_x()).sum::<f64>() / count,
        Alignment::Top => items.iter().map(|(_, p)| p.y).fold(f64::INFINITY, f64::min),
        Alignment::Bottom => items.iter().map(|(_, p)| p.bottom()).fold(f64::NEG_INFINITY, f64::max),
        Alignment::Middle => items.iter().map(|(_, p)| p.center_y()).sum::<f64>() / count,
    };

    let aligned = items
        .iter()
        .map(|&(id, p)| {
            let mut next = p;
            match alignment {
                Alignment::Left => next.x = reference,
                Alignment::Right => next.x = reference - p.width,
                Alignment::Center => next.x = reference - p.width / 2.0,
                Alignment::Top => next.y = reference,
                Alignment::Bottom => next.y = reference - p.height,
                Alignment::Middle => next.y = reference - p.height / 2.0,
            }
            (id, next)
        })
        .collect();
    Some(aligned)
}

/// Spread items evenly along an axis between the outermost two, which are
/// never moved. Returns `None` when fewer than three items are given.
///
/// Items are sorted by their center along the axis (stable, so ties keep the
/// caller's order); interior centers land at `first + spacing * index` where
/// `spacing = (last - first) / (count - 1)`.
#[must_use]
pub fn distribute(items: &[(ElementId, Position)], direction: Direction) -> Option<Vec<(ElementId, Position)>> {
    if items.len() < 3 {
        return None;
    }

    let mut sorted: Vec<(ElementId, Position)> = items.to_vec();
    match direction {
        Direction::Horizontal => sorted.sort_by(|a, b| a.1.center_x().total_cmp(&b.1.center_x())),
        Direction::Vertical => sorted.sort_by(|a, b| a.1.center_y().total_cmp(&b.1.center_y())),
    }

    let reference = |p: &Position| match direction {
        Direction::Horizontal => p.center_x(),
        Direction::Vertical => p.center_y(),
    };
    let first = reference(&sorted[0].1);
    let last = reference(&sorted[sorted.len() - 1].1);
    #[allow(clippy::cast_precision_loss)]
    let spacing = (last - first) / (sorted.len() - 1) as f64;

    let distributed = sorted
        .iter()
        .enumerate()
        .map(|(i, &(id, p))| {
            let mut next = p;
            #[allow(clippy::cast_precision_loss)]
            let target = first + spacing * i as f64;
            match direction {
                Direction::Horizontal => next.x = target - p.width / 2.0,
                Direction::Vertical => next.y = target - p.height / 2.0,
            }
            (id, next)
        })
        .collect();
    Some(distributed)
}

/// Axis-aligned bounding-box overlap test. Symmetric; boxes touching exactly
/// on an edge count as overlapping.
#[must_use]
pub fn overlaps(a: &Position, b: &Position) -> bool {
    !(a.right() < b.x || b.right() < a.x || a.bottom() < b.y || b.bottom() < a.y)
}

/// Round a coordinate to the nearest multiple of the grid cell size.
/// A non-positive grid size leaves the value unchanged.
#[must_use]
pub fn snap(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Snap a position's origin to the grid. Sizes are never snapped.
#[must_use]
pub fn snap_position(position: Position, grid_size: f64) -> Position {
    Position {
        x: snap(position.x, grid_size),
        y: snap(position.y, grid_size),
        ..position
    }
}

/// Union bounding box of a set of positions. `None` for the empty set.
#[must_use]
pub fn bounds(items: &[(ElementId, Position)]) -> Option<Position> {
    let (_, head) = *items.first()?;
    let mut min_x = head.x;
    let mut min_y = head.y;
    let mut max_x = head.right();
    let mut max_y = head.bottom();
    for (_, p) in &items[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.right());
        max_y = max_y.max(p.bottom());
    }
    Some(Position::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
