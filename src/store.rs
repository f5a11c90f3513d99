//! In-memory element store: the authoritative collection for one open template.
//!
//! DESIGN
//! ======
//! Elements live in a `Vec` in insertion order. Canvases hold low hundreds of
//! elements, so linear lookup is fine, and a stable sort over the vector gives
//! the required z-tie behavior: equal z-indexes paint in insertion order.
//! `create` never fails; `update`, `delete` and the z-order ops are silent
//! no-ops returning `false` when their preconditions fail (missing ids,
//! mismatched props variants).

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tracing::warn;
use uuid::Uuid;

use crate::element::{Element, ElementId, ElementKind, ElementProps, PartialElement, Position, TemplateId};

/// Owns the live elements of one open template.
#[derive(Debug, Clone)]
pub struct ElementStore {
    template_id: TemplateId,
    elements: Vec<Element>,
}

impl ElementStore {
    /// Create an empty store for the given template.
    #[must_use]
    pub fn new(template_id: TemplateId) -> Self {
        Self { template_id, elements: Vec::new() }
    }

    /// The template this store belongs to.
    #[must_use]
    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    // --- Mutations ---

    /// Create an element. Assigns a fresh id, kind-default properties when
    /// none are given, and the next z-index (`max + 1`, or 0 when empty).
    /// Never fails; a props variant that doesn't match `kind` is discarded in
    /// favor of the defaults.
    pub fn create(&mut self, kind: ElementKind, position: Position, props: Option<ElementProps>) -> &Element {
        let props = match props {
            Some(p) if p.kind() == kind => p,
            Some(p) => {
                warn!(kind = kind.as_str(), got = p.kind().as_str(), "props variant mismatch on create, using defaults");
                ElementProps::default_for(kind)
            }
            None => ElementProps::default_for(kind),
        };
        let element = Element {
            id: Uuid::new_v4(),
            template_id: self.template_id,
            kind,
            position,
            z_index: self.next_z_index(),
            version: 1,
            props,
        };
        self.elements.push(element);
        // Just pushed, so the vector is non-empty.
        &self.elements[self.elements.len() - 1]
    }

    /// Shallow-merge a sparse update into an element. Returns `false` (and
    /// leaves everything untouched) when the id is absent or the props patch
    /// targets a different kind. The version counter advances unless the
    /// patch carries an explicit version (a gateway echo).
    pub fn update(&mut self, id: &ElementId, partial: &PartialElement) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == *id) else {
            warn!(%id, "update for unknown element ignored");
            return false;
        };
        if let Some(ref props) = partial.props {
            if props.kind() != element.kind {
                warn!(%id, expected = element.kind.as_str(), got = props.kind().as_str(), "props variant mismatch on update ignored");
                return false;
            }
        }
        if let Some(x) = partial.x {
            element.position.x = x;
        }
        if let Some(y) = partial.y {
            element.position.y = y;
        }
        if let Some(w) = partial.width {
            element.position.width = w;
        }
        if let Some(h) = partial.height {
            element.position.height = h;
        }
        if let Some(z) = partial.z_index {
            element.z_index = z;
        }
        if let Some(ref props) = partial.props {
            element.props = props.clone();
        }
        match partial.version {
            Some(v) => element.version = v,
            None => element.version += 1,
        }
        true
    }

    /// Remove an element. Idempotent: removing an absent id returns `false`
    /// and is not an error.
    pub fn delete(&mut self, id: &ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != *id);
        self.elements.len() != before
    }

    /// Deep-copy an element, offset both axes, and place the copy on top.
    /// Returns the new element, or `None` when the source id is absent.
    pub fn duplicate(&mut self, id: &ElementId, offset_x: f64, offset_y: f64) -> Option<Element> {
        let source = self.elements.iter().find(|e| e.id == *id)?.clone();
        let copy = Element {
            id: Uuid::new_v4(),
            template_id: source.template_id,
            kind: source.kind,
            position: Position {
                x: source.position.x + offset_x,
                y: source.position.y + offset_y,
                ..source.position
            },
            z_index: self.next_z_index(),
            version: 1,
            props: source.props,
        };
        self.elements.push(copy.clone());
        Some(copy)
    }

    /// Insert or replace an element wholesale (gateway echoes carrying
    /// authoritative fields). An existing element with the same id is
    /// overwritten in place, keeping its insertion slot.
    pub fn insert(&mut self, element: Element) {
        match self.elements.iter_mut().find(|e| e.id == element.id) {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
    }

    /// Replace the element stored under `old_id` with an authoritative copy
    /// whose id may differ (gateway-assigned), keeping the insertion slot.
    /// Falls back to a plain insert when `old_id` is unknown.
    pub fn replace(&mut self, old_id: &ElementId, element: Element) {
        match self.elements.iter_mut().find(|e| e.id == *old_id) {
            Some(slot) => *slot = element,
            None => self.insert(element),
        }
    }

    /// Replace all elements with a full snapshot (history replay or gateway
    /// re-sync). Insertion order follows the snapshot order.
    pub fn load_snapshot(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    // --- Z-order ---

    /// Raise an element above everything else (`max + 1`).
    pub fn bring_to_front(&mut self, id: &ElementId) -> bool {
        let Some(top) = self.elements.iter().map(|e| e.z_index).max() else {
            return false;
        };
        self.set_z(id, top + 1)
    }

    /// Lower an element beneath everything else (`min - 1`).
    pub fn send_to_back(&mut self, id: &ElementId) -> bool {
        let Some(bottom) = self.elements.iter().map(|e| e.z_index).min() else {
            return false;
        };
        self.set_z(id, bottom - 1)
    }

    /// Raise an element one layer. May create a temporary z-tie; ties paint
    /// in insertion order.
    pub fn move_up(&mut self, id: &ElementId) -> bool {
        let Some(current) = self.elements.iter().find(|e| e.id == *id).map(|e| e.z_index) else {
            return false;
        };
        self.set_z(id, current + 1)
    }

    /// Lower an element one layer.
    pub fn move_down(&mut self, id: &ElementId) -> bool {
        let Some(current) = self.elements.iter().find(|e| e.id == *id).map(|e| e.z_index) else {
            return false;
        };
        self.set_z(id, current - 1)
    }

    fn set_z(&mut self, id: &ElementId, z: i64) -> bool {
        self.update(id, &PartialElement { z_index: Some(z), ..Default::default() })
    }

    fn next_z_index(&self) -> i64 {
        self.elements.iter().map(|e| e.z_index).max().map_or(0, |z| z + 1)
    }

    // --- Reads ---

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == *id)
    }

    /// All elements of one kind, in insertion order.
    #[must_use]
    pub fn by_kind(&self, kind: ElementKind) -> Vec<&Element> {
        self.elements.iter().filter(|e| e.kind == kind).collect()
    }

    /// All elements sorted by z-index. The sort is stable, so z-ties keep
    /// insertion order in both directions.
    #[must_use]
    pub fn sorted_by_z(&self, ascending: bool) -> Vec<&Element> {
        let mut sorted: Vec<&Element> = self.elements.iter().collect();
        if ascending {
            sorted.sort_by(|a, b| a.z_index.cmp(&b.z_index));
        } else {
            sorted.sort_by(|a, b| b.z_index.cmp(&a.z_index));
        }
        sorted
    }

    /// All elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether an element with this id exists.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.iter().any(|e| e.id == *id)
    }

    /// Number of elements currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
