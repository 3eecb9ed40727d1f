//! Linear undo/redo over whole-scene snapshots.
//!
//! Before every mutation the controller records the scene as it was. Undo
//! swaps the current scene for the newest recorded snapshot and keeps the
//! current one for redo; redo is the mirror image. Recording a new snapshot
//! discards the redo stack.

use crate::scene::SceneSnapshot;

/// Default number of undo steps kept.
pub const DEFAULT_MAX_DEPTH: usize = 50;

#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    undo_stack: Vec<SceneSnapshot>,
    redo_stack: Vec<SceneSnapshot>,
    max_depth: usize,
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl UndoRedoManager {
    /// Creates an empty history keeping at most `max_depth` undo steps
    /// (at least one).
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Records the pre-mutation scene. Drops the oldest step past the depth
    /// limit.
    pub fn record(&mut self, before: SceneSnapshot) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Returns the snapshot to restore, stashing `current` for redo.
    pub fn undo(&mut self, current: SceneSnapshot) -> Option<SceneSnapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Returns the snapshot to restore, stashing `current` for undo.
    pub fn redo(&mut self, current: SceneSnapshot) -> Option<SceneSnapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
