//! Undo/redo functionality for designer state.

use tracing::debug;

use super::{DesignerState, DrawingGesture, Gesture};

impl DesignerState {
    /// Records the current scene ahead of a mutation.
    pub(crate) fn record_snapshot(&mut self) {
        self.history.record(self.scene.snapshot());
        self.is_modified = true;
    }

    /// Undo last change
    pub fn undo(&mut self) {
        let Some(previous) = self.history.undo(self.scene.snapshot()) else {
            return;
        };
        self.scene.restore(previous);
        self.after_history_step();
        debug!(shapes = self.scene.len(), "undo");
    }

    /// Redo last undo
    pub fn redo(&mut self) {
        let Some(next) = self.history.redo(self.scene.snapshot()) else {
            return;
        };
        self.scene.restore(next);
        self.after_history_step();
        debug!(shapes = self.scene.len(), "redo");
    }

    fn after_history_step(&mut self) {
        if let DrawingGesture::Bounded { .. } = self.drawing {
            self.drawing = DrawingGesture::None;
        }
        self.gesture = Gesture::Idle;
        self.selection.retain_existing(&self.scene);
        self.is_modified = true;
        self.request_redraw();
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Clear history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
