//! Top-level canvas engine: store + selection + history behind one mutation
//! protocol.
//!
//! Every public mutation applies synchronously to the in-memory model,
//! commits a history snapshot, and returns a list of [`Action`]s describing
//! what changed. The host UI renders from the store and forwards actions to
//! the persistence gateway fire-and-forget; gateway echoes come back through
//! the `apply_remote_*` entry points, which mutate without recording history
//! (a server echo of your own write must not create a second undo step).
//!
//! Precondition failures (unknown ids, too few elements to align, undo at the
//! boundary) return an empty action list and leave all state untouched.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, warn};

use crate::consts::{DUPLICATE_OFFSET, MAX_HISTORY};
use crate::element::{Element, ElementId, ElementKind, ElementProps, PartialElement, Position, TemplateId};
use crate::history::{History, Snapshot};
use crate::layout::{self, Alignment, Direction};
use crate::selection::Selection;
use crate::store::ElementStore;
use crate::template::{GridConfig, PageFormat, Template};
use crate::validate::{ValidationIssue, validate_element};

/// Change notifications returned from engine mutations for the host to
/// process: repaint, and forward document changes to the gateway.
#[derive(Debug, Clone)]
pub enum Action {
    ElementCreated(Element),
    ElementUpdated { id: ElementId, fields: PartialElement },
    ElementDeleted { id: ElementId },
    /// New z-indexes for the listed elements; maps onto the gateway's batch
    /// reorder call.
    ElementsReordered(Vec<(ElementId, i64)>),
    SelectionChanged,
    FormatChanged(PageFormat),
    /// The whole document was replaced (undo/redo or re-sync); re-read the store.
    DocumentReplaced,
    RenderNeeded,
}

/// The canvas document/editing engine for one open template.
pub struct CanvasEngine {
    store: ElementStore,
    selection: Selection,
    history: History,
    grid: GridConfig,
    format: PageFormat,
}

impl CanvasEngine {
    /// Start an empty canvas for the given template.
    #[must_use]
    pub fn new(template_id: TemplateId, format: PageFormat, grid: GridConfig) -> Self {
        let store = ElementStore::new(template_id);
        let baseline = Snapshot::new(Vec::new(), format);
        Self {
            store,
            selection: Selection::new(),
            history: History::new(baseline, MAX_HISTORY),
            grid,
            format,
        }
    }

    /// Open an existing template, hydrating its elements as the history
    /// baseline.
    #[must_use]
    pub fn open(template: &Template) -> Self {
        let mut store = ElementStore::new(template.id);
        store.load_snapshot(template.elements.clone());
        let baseline = Snapshot::new(store.elements().to_vec(), template.format);
        Self {
            store,
            selection: Selection::new(),
            history: History::new(baseline, MAX_HISTORY),
            grid: template.grid,
            format: template.format,
        }
    }

    // --- Element mutations ---

    /// Create an element and record one undo step.
    pub fn create_element(
        &mut self,
        kind: ElementKind,
        position: Position,
        props: Option<ElementProps>,
    ) -> Vec<Action> {
        let element = self.store.create(kind, position, props).clone();
        debug!(id = %element.id, kind = kind.as_str(), "element created");
        self.commit_history();
        vec![Action::ElementCreated(element), Action::RenderNeeded]
    }

    /// Apply a sparse update to one element. Unknown ids and mismatched props
    /// variants are reported no-ops.
    pub fn update_element(&mut self, id: &ElementId, partial: &PartialElement) -> Vec<Action> {
        if !self.store.update(id, partial) {
            return Vec::new();
        }
        self.commit_history();
        vec![
            Action::ElementUpdated { id: *id, fields: partial.clone() },
            Action::RenderNeeded,
        ]
    }

    /// Delete an element, purging it from the selection in the same step.
    /// Deleting an absent id is a no-op.
    pub fn delete_element(&mut self, id: &ElementId) -> Vec<Action> {
        let was_selected = self.selection.contains(id);
        if !self.store.delete(id) {
            return Vec::new();
        }
        self.selection.retain(|sel| sel != id);
        self.commit_history();
        let mut actions = vec![Action::ElementDeleted { id: *id }];
        if was_selected {
            actions.push(Action::SelectionChanged);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Deep-copy an element with the standard offset, placing the copy on top.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Vec<Action> {
        let Some(copy) = self.store.duplicate(id, DUPLICATE_OFFSET, DUPLICATE_OFFSET) else {
            warn!(%id, "duplicate of unknown element ignored");
            return Vec::new();
        };
        self.commit_history();
        vec![Action::ElementCreated(copy), Action::RenderNeeded]
    }

    /// Handle a toolbox drop: parse the payload tag, snap the drop point to
    /// the grid when snapping is on, and create with kind-default size.
    pub fn drop_payload(&mut self, tag: &str, x: f64, y: f64) -> Vec<Action> {
        let kind = match tag.parse::<ElementKind>() {
            Ok(kind) => kind,
            Err(err) => {
                warn!(%err, "drop payload ignored");
                return Vec::new();
            }
        };
        let (width, height) = kind.default_size();
        let mut position = Position::new(x, y, width, height);
        if self.grid.enabled && self.grid.snap_to_grid {
            position = layout::snap_position(position, self.grid.size);
        }
        self.create_element(kind, position, None)
    }

    // --- Selection ---

    /// Select an element. Without `multi` the selection becomes `{id}`; with
    /// `multi` membership is toggled. Unknown ids are ignored.
    pub fn select(&mut self, id: &ElementId, multi: bool) -> Vec<Action> {
        if !self.store.contains(id) {
            warn!(%id, "select of unknown element ignored");
            return Vec::new();
        }
        self.selection.select(*id, multi);
        vec![Action::SelectionChanged]
    }

    /// Select every element on the canvas.
    pub fn select_all(&mut self) -> Vec<Action> {
        self.selection.select_all(self.store.elements().iter().map(|e| e.id));
        vec![Action::SelectionChanged]
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        self.selection.clear();
        vec![Action::SelectionChanged]
    }

    // --- Layout over the selection ---

    /// Align the selected elements. A no-op (with a debug report) when fewer
    /// than two are selected. One undo step for the whole operation.
    pub fn align_selected(&mut self, alignment: Alignment) -> Vec<Action> {
        let items = self.selected_items();
        let Some(aligned) = layout::align(&items, alignment) else {
            debug!(selected = items.len(), "align needs at least two elements");
            return Vec::new();
        };
        self.apply_layout(&aligned)
    }

    /// Distribute the selected elements evenly. A no-op when fewer than three
    /// are selected. One undo step for the whole operation.
    pub fn distribute_selected(&mut self, direction: Direction) -> Vec<Action> {
        let items = self.selected_items();
        let Some(distributed) = layout::distribute(&items, direction) else {
            debug!(selected = items.len(), "distribute needs at least three elements");
            return Vec::new();
        };
        self.apply_layout(&distributed)
    }

    /// Selected `(id, position)` snapshots in insertion order.
    fn selected_items(&self) -> Vec<(ElementId, Position)> {
        self.store
            .elements()
            .iter()
            .filter(|e| self.selection.contains(&e.id))
            .map(|e| (e.id, e.position))
            .collect()
    }

    /// Apply recomputed positions, skipping elements that didn't move, as one
    /// logical mutation.
    fn apply_layout(&mut self, placements: &[(ElementId, Position)]) -> Vec<Action> {
        let mut actions = Vec::new();
        for &(id, next) in placements {
            let unchanged = self.store.get(&id).is_some_and(|e| e.position == next);
            if unchanged {
                continue;
            }
            let fields = PartialElement::moved_to(next.x, next.y);
            if self.store.update(&id, &fields) {
                actions.push(Action::ElementUpdated { id, fields });
            }
        }
        if actions.is_empty() {
            return Vec::new();
        }
        self.commit_history();
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Z-order ---

    /// Raise an element above everything else.
    pub fn bring_to_front(&mut self, id: &ElementId) -> Vec<Action> {
        self.reorder(id, ElementStore::bring_to_front)
    }

    /// Lower an element beneath everything else.
    pub fn send_to_back(&mut self, id: &ElementId) -> Vec<Action> {
        self.reorder(id, ElementStore::send_to_back)
    }

    /// Raise an element one layer.
    pub fn move_layer_up(&mut self, id: &ElementId) -> Vec<Action> {
        self.reorder(id, ElementStore::move_up)
    }

    /// Lower an element one layer.
    pub fn move_layer_down(&mut self, id: &ElementId) -> Vec<Action> {
        self.reorder(id, ElementStore::move_down)
    }

    fn reorder(&mut self, id: &ElementId, op: fn(&mut ElementStore, &ElementId) -> bool) -> Vec<Action> {
        if !op(&mut self.store, id) {
            return Vec::new();
        }
        self.commit_history();
        let Some(element) = self.store.get(id) else {
            return Vec::new();
        };
        vec![
            Action::ElementsReordered(vec![(*id, element.z_index)]),
            Action::RenderNeeded,
        ]
    }

    // --- Document state ---

    /// Change the page format. Recorded in history like any other mutation.
    pub fn set_format(&mut self, format: PageFormat) -> Vec<Action> {
        if self.format == format {
            return Vec::new();
        }
        self.format = format;
        self.commit_history();
        vec![Action::FormatChanged(format), Action::RenderNeeded]
    }

    /// Replace the grid configuration. Grid settings are host input, not
    /// document state, so this is not undoable.
    pub fn set_grid(&mut self, grid: GridConfig) -> Vec<Action> {
        self.grid = grid;
        vec![Action::RenderNeeded]
    }

    // --- History ---

    /// Step back one snapshot. A no-op at the history boundary.
    pub fn undo(&mut self) -> Vec<Action> {
        let Some(snapshot) = self.history.undo() else {
            return Vec::new();
        };
        self.apply_snapshot(&snapshot);
        self.history.finish_replay();
        vec![Action::DocumentReplaced, Action::RenderNeeded]
    }

    /// Step forward one snapshot. A no-op when nothing was undone.
    pub fn redo(&mut self) -> Vec<Action> {
        let Some(snapshot) = self.history.redo() else {
            return Vec::new();
        };
        self.apply_snapshot(&snapshot);
        self.history.finish_replay();
        vec![Action::DocumentReplaced, Action::RenderNeeded]
    }

    fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.store.load_snapshot(snapshot.elements.clone());
        self.format = snapshot.format;
        let survivors: Vec<ElementId> = snapshot.elements.iter().map(|e| e.id).collect();
        self.selection.retain(|id| survivors.contains(id));
    }

    fn commit_history(&mut self) {
        let snapshot = Snapshot::new(self.store.elements().to_vec(), self.format);
        self.history.commit(snapshot);
    }

    // --- Gateway reconciliation ---

    /// Apply a gateway echo: element created remotely (or id/fields made
    /// authoritative). Not recorded in history.
    pub fn apply_remote_create(&mut self, element: Element) {
        self.store.insert(element);
    }

    /// Reconcile a provisional local element with the gateway's authoritative
    /// copy. The provisional entry is replaced in place; if the gateway
    /// assigned a different id, the selection follows the rename. Not
    /// recorded in history.
    pub fn reconcile_created(&mut self, provisional_id: &ElementId, authoritative: Element) {
        let new_id = authoritative.id;
        self.store.replace(provisional_id, authoritative);
        if *provisional_id != new_id && self.selection.contains(provisional_id) {
            self.selection.retain(|id| id != provisional_id);
            self.selection.select(new_id, true);
        }
    }

    /// Apply a gateway echo: element updated remotely. Not recorded in history.
    pub fn apply_remote_update(&mut self, id: &ElementId, fields: &PartialElement) {
        self.store.update(id, fields);
    }

    /// Apply a gateway echo: element deleted remotely. Purges the selection
    /// like a local delete, but is not recorded in history.
    pub fn apply_remote_delete(&mut self, id: &ElementId) {
        if self.store.delete(id) {
            self.selection.retain(|sel| sel != id);
        }
    }

    /// Replace the whole document from a gateway re-sync. History restarts at
    /// the new baseline; stale selection entries are pruned.
    pub fn load_snapshot(&mut self, elements: Vec<Element>) {
        self.store.load_snapshot(elements);
        let survivors: Vec<ElementId> = self.store.elements().iter().map(|e| e.id).collect();
        self.selection.retain(|id| survivors.contains(id));
        let baseline = Snapshot::new(self.store.elements().to_vec(), self.format);
        self.history.reset(baseline);
    }

    // --- Queries ---

    /// Advisory validation over the whole document; elements without issues
    /// are omitted.
    #[must_use]
    pub fn validation_report(&self) -> Vec<(ElementId, Vec<ValidationIssue>)> {
        self.store
            .elements()
            .iter()
            .map(|e| (e.id, validate_element(e)))
            .filter(|(_, issues)| !issues.is_empty())
            .collect()
    }

    #[must_use]
    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    #[must_use]
    pub fn format(&self) -> PageFormat {
        self.format
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
