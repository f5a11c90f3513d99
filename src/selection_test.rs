use uuid::Uuid;

use super::*;

fn ids(n: usize) -> Vec<ElementId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

// =============================================================
// Single select
// =============================================================

#[test]
fn new_selection_is_empty() {
    let selection = Selection::new();
    assert!(selection.is_empty());
    assert_eq!(selection.len(), 0);
}

#[test]
fn select_replaces_previous_selection() {
    let [a, b] = [Uuid::new_v4(), Uuid::new_v4()];
    let mut selection = Selection::new();
    selection.select(a, false);
    selection.select(b, false);
    assert_eq!(selection.len(), 1);
    assert!(selection.contains(&b));
    assert!(!selection.contains(&a));
}

#[test]
fn select_same_id_again_keeps_it_selected() {
    let a = Uuid::new_v4();
    let mut selection = Selection::new();
    selection.select(a, false);
    selection.select(a, false);
    assert!(selection.contains(&a));
    assert_eq!(selection.len(), 1);
}

// =============================================================
// Multi select (toggle)
// =============================================================

#[test]
fn multi_select_adds_to_existing() {
    let [a, b] = [Uuid::new_v4(), Uuid::new_v4()];
    let mut selection = Selection::new();
    selection.select(a, false);
    selection.select(b, true);
    assert_eq!(selection.len(), 2);
    assert!(selection.contains(&a));
    assert!(selection.contains(&b));
}

#[test]
fn multi_select_toggles_membership_off() {
    let a = Uuid::new_v4();
    let mut selection = Selection::new();
    selection.select(a, true);
    assert!(selection.contains(&a));
    selection.select(a, true);
    assert!(!selection.contains(&a));
    assert!(selection.is_empty());
}

// =============================================================
// select_all / clear / retain
// =============================================================

#[test]
fn select_all_replaces_with_given_ids() {
    let all = ids(3);
    let mut selection = Selection::new();
    selection.select(Uuid::new_v4(), false);
    selection.select_all(all.iter().copied());
    assert_eq!(selection.len(), 3);
    for id in &all {
        assert!(selection.contains(id));
    }
}

#[test]
fn clear_empties_selection() {
    let mut selection = Selection::new();
    selection.select(Uuid::new_v4(), false);
    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn retain_drops_unknown_ids() {
    let all = ids(3);
    let mut selection = Selection::new();
    selection.select_all(all.iter().copied());
    let keep = all[1];
    selection.retain(|id| *id == keep);
    assert_eq!(selection.len(), 1);
    assert!(selection.contains(&keep));
}

#[test]
fn ids_returns_every_member() {
    let all = ids(2);
    let mut selection = Selection::new();
    selection.select_all(all.iter().copied());
    let mut got = selection.ids();
    got.sort();
    let mut want = all;
    want.sort();
    assert_eq!(got, want);
}
