#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;

// =============================================================
// PageFormat
// =============================================================

#[test]
fn format_dimensions_are_portrait() {
    for format in [PageFormat::A4, PageFormat::Letter, PageFormat::Legal] {
        let (w, h) = format.dimensions();
        assert!(w > 0.0);
        assert!(h > w, "{format:?} should be taller than wide");
    }
}

#[test]
fn format_a4_dimensions() {
    assert_eq!(PageFormat::A4.dimensions(), (595.0, 842.0));
}

#[test]
fn format_serde_lowercase() {
    assert_eq!(serde_json::to_string(&PageFormat::Letter).unwrap(), "\"letter\"");
    let back: PageFormat = serde_json::from_str("\"legal\"").unwrap();
    assert_eq!(back, PageFormat::Legal);
}

#[test]
fn format_default_is_a4() {
    assert_eq!(PageFormat::default(), PageFormat::A4);
}

// =============================================================
// GridConfig
// =============================================================

#[test]
fn grid_default_values() {
    let grid = GridConfig::default();
    assert_eq!(grid.size, crate::consts::DEFAULT_GRID_SIZE);
    assert!(grid.enabled);
    assert!(grid.visible);
    assert!(!grid.snap_to_grid);
    assert_eq!(grid.snap_threshold, crate::consts::DEFAULT_SNAP_THRESHOLD);
}

#[test]
fn grid_from_env_without_overrides_matches_default() {
    assert_eq!(GridConfig::from_env(), GridConfig::default());
}

#[test]
fn grid_serde_roundtrip() {
    let grid = GridConfig { size: 8.0, enabled: false, visible: true, snap_to_grid: true, snap_threshold: 4.0 };
    let serialized = serde_json::to_string(&grid).unwrap();
    let back: GridConfig = serde_json::from_str(&serialized).unwrap();
    assert_eq!(back, grid);
}

// =============================================================
// Template
// =============================================================

#[test]
fn template_serde_roundtrip() {
    let template = Template {
        id: Uuid::nil(),
        name: "Q3 proposal".to_owned(),
        format: PageFormat::Letter,
        canvas_background: "#FFFFFF".to_owned(),
        grid: GridConfig::default(),
        elements: Vec::new(),
    };
    let serialized = serde_json::to_string(&template).unwrap();
    let back: Template = serde_json::from_str(&serialized).unwrap();
    assert_eq!(back, template);
}
