//! Bounded linear undo/redo over full document snapshots.
//!
//! DESIGN
//! ======
//! Three logical positions: `past`, `present`, `future`. Committing a
//! mutation pushes the old present onto `past` (dropping the oldest entry
//! beyond the cap) and clears `future`. Undo/redo shuttle snapshots between
//! the three. Snapshots are full clones of the element collection plus the
//! page format — the collections are small (low hundreds of elements), so
//! structural sharing is not worth the complexity.
//!
//! Applying a restored snapshot back into the store must not itself record
//! history: `undo`/`redo` raise a replay flag that makes `commit` a no-op
//! until the caller finishes applying with [`History::finish_replay`].

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::element::Element;
use crate::template::PageFormat;

/// An immutable full copy of the document state at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Elements in insertion order.
    pub elements: Vec<Element>,
    /// Page format at capture time.
    pub format: PageFormat,
}

impl Snapshot {
    #[must_use]
    pub fn new(elements: Vec<Element>, format: PageFormat) -> Self {
        Self { elements, format }
    }
}

/// Linear undo/redo history with a bounded past.
#[derive(Debug)]
pub struct History {
    past: VecDeque<Snapshot>,
    present: Snapshot,
    future: VecDeque<Snapshot>,
    max_past: usize,
    replaying: bool,
}

impl History {
    /// Start history at `initial`, retaining at most `max_past` undo steps.
    #[must_use]
    pub fn new(initial: Snapshot, max_past: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            max_past,
            replaying: false,
        }
    }

    /// Record a committed mutation: the old present moves into the past and
    /// any redo branch is discarded. No-op while a replay is in progress.
    pub fn commit(&mut self, next: Snapshot) {
        if self.replaying {
            return;
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        while self.past.len() > self.max_past {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Step back one snapshot. Returns the restored state for the caller to
    /// apply, or `None` at the history boundary. Raises the replay flag; the
    /// caller must invoke [`History::finish_replay`] once applied.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let restored = self.past.pop_back()?;
        let displaced = std::mem::replace(&mut self.present, restored);
        self.future.push_front(displaced);
        self.replaying = true;
        Some(self.present.clone())
    }

    /// Step forward one snapshot; symmetric to [`History::undo`].
    pub fn redo(&mut self) -> Option<Snapshot> {
        let restored = self.future.pop_front()?;
        let displaced = std::mem::replace(&mut self.present, restored);
        self.past.push_back(displaced);
        while self.past.len() > self.max_past {
            self.past.pop_front();
        }
        self.replaying = true;
        Some(self.present.clone())
    }

    /// Lower the replay flag after the restored snapshot has been applied.
    pub fn finish_replay(&mut self) {
        self.replaying = false;
    }

    /// Discard all history and restart at `baseline` (e.g. after a gateway
    /// re-sync replaces the document wholesale).
    pub fn reset(&mut self, baseline: Snapshot) {
        self.past.clear();
        self.future.clear();
        self.present = baseline;
        self.replaying = false;
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// True while a restored snapshot is being applied.
    #[must_use]
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Number of undo steps currently available.
    #[must_use]
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// The state the document should currently reflect.
    #[must_use]
    pub fn present(&self) -> &Snapshot {
        &self.present
    }
}
