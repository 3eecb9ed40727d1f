//! Shape operations (delete, group, copy, paste) for designer state.

use sketchpad_core::{min_corner, Point};
use tracing::debug;

use super::{DesignerState, EditorMode};
use crate::error::{DesignerError, DesignerResult};
use crate::model::{DesignerShape, Shape};

/// Offset that moves the clipboard's minimal corner onto `target`.
pub(crate) fn paste_offset(shapes: &[Shape], target: Point) -> (f64, f64) {
    match min_corner(shapes.iter().filter_map(|s| s.min_corner())) {
        Some(corner) => (target.x - corner.x, target.y - corner.y),
        None => (0.0, 0.0),
    }
}

impl DesignerState {
    /// Check if grouping is possible (more than one shape selected).
    pub fn can_group(&self) -> bool {
        self.selection.len() > 1
    }

    /// Check if ungrouping is possible (exactly one group selected).
    pub fn can_ungroup(&self) -> bool {
        self.selected_group().is_some()
    }

    fn selected_group(&self) -> Option<u64> {
        let id = self.selection.single()?;
        self.scene.get(id).filter(|o| o.shape.is_group()).map(|o| o.id)
    }

    /// Deletes the selected shape(s).
    pub fn delete_selected(&mut self) {
        let ids = self.selection.ids_in_z_order(&self.scene);
        if ids.is_empty() {
            return;
        }
        self.record_snapshot();
        for id in &ids {
            self.scene.remove(*id);
        }
        self.selection.deselect_all();
        debug!(count = ids.len(), "deleted shapes");
        self.request_redraw();
    }

    /// Groups the selection; does nothing unless more than one shape is selected.
    pub fn group_selected(&mut self) {
        if let Err(e) = self.try_group_selected() {
            debug!("group ignored: {}", e);
        }
    }

    /// Replaces the selected shapes with one group holding them in z-order.
    pub fn try_group_selected(&mut self) -> DesignerResult<u64> {
        if !self.can_group() {
            return Err(DesignerError::invalid_operation(
                "grouping needs more than one selected shape",
            ));
        }
        let ids = self.selection.ids_in_z_order(&self.scene);
        let before = self.scene.snapshot();
        let group_id = self.scene.replace(&ids).ok_or_else(|| {
            DesignerError::invalid_operation("selection refers to shapes not in the scene")
        })?;
        self.history.record(before);
        self.is_modified = true;
        self.selection.select_only(group_id);
        debug!(group_id, members = ids.len(), "grouped shapes");
        self.request_redraw();
        Ok(group_id)
    }

    /// Ungroups the selection; does nothing unless exactly one group is selected.
    pub fn ungroup_selected(&mut self) {
        if let Err(e) = self.try_ungroup_selected() {
            debug!("ungroup ignored: {}", e);
        }
    }

    /// Splits the selected group back into its members, which become the
    /// selection.
    pub fn try_ungroup_selected(&mut self) -> DesignerResult<Vec<u64>> {
        let group_id = self.selected_group().ok_or_else(|| {
            DesignerError::invalid_operation("ungrouping needs exactly one selected group")
        })?;
        let before = self.scene.snapshot();
        let member_ids = self
            .scene
            .expand(group_id)
            .ok_or_else(|| DesignerError::invalid_operation("selected shape is not a group"))?;
        self.history.record(before);
        self.is_modified = true;
        self.selection.set(member_ids.iter().copied());
        debug!(group_id, members = member_ids.len(), "ungrouped shapes");
        self.request_redraw();
        Ok(member_ids)
    }

    /// Deep-copies the selection, bottom to top, into the clipboard. An empty
    /// selection leaves the clipboard as it was.
    pub fn copy_selected(&mut self) {
        let ids = self.selection.ids_in_z_order(&self.scene);
        if ids.is_empty() {
            return;
        }
        let shapes: Vec<Shape> = ids
            .iter()
            .filter_map(|id| self.scene.get(*id))
            .map(|o| o.shape.clone())
            .collect();
        debug!(count = shapes.len(), "copied shapes");
        self.clipboard = Some(shapes);
    }

    /// Copy followed by delete.
    pub fn cut_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.copy_selected();
        self.delete_selected();
    }

    /// Pastes at the last pointer position (the origin if none is known yet).
    pub fn paste(&mut self) {
        let target = self.pointer.unwrap_or(Point::new(0.0, 0.0));
        self.paste_at(target);
    }

    pub fn paste_at(&mut self, target: Point) {
        if let Err(e) = self.try_paste_at(target) {
            debug!("paste ignored: {}", e);
        }
    }

    /// Inserts copies of the clipboard with their minimal corner at `target`.
    /// The pasted shapes become the selection.
    pub fn try_paste_at(&mut self, target: Point) -> DesignerResult<Vec<u64>> {
        let shapes = match &self.clipboard {
            Some(shapes) if !shapes.is_empty() => shapes.clone(),
            _ => return Err(DesignerError::invalid_operation("clipboard is empty")),
        };
        let (dx, dy) = paste_offset(&shapes, target);

        self.record_snapshot();
        let ids: Vec<u64> = shapes
            .into_iter()
            .map(|mut shape| {
                shape.translate(dx, dy);
                self.scene.insert(shape)
            })
            .collect();
        self.selection.set(ids.iter().copied());
        debug!(count = ids.len(), dx, dy, "pasted shapes");
        self.request_redraw();
        Ok(ids)
    }

    /// Shows the clipboard under the pointer until the next primary press
    /// commits it. Does nothing with an empty clipboard.
    pub fn begin_paste_preview(&mut self) {
        if self.clipboard.as_ref().map_or(true, |c| c.is_empty()) {
            debug!("paste preview ignored: clipboard is empty");
            return;
        }
        self.abort_in_progress();
        self.mode = EditorMode::PastePreview;
        self.request_redraw();
    }

    /// Selects every shape in the scene.
    pub fn select_all(&mut self) {
        self.selection.select_all(&self.scene);
        self.request_redraw();
    }

    /// Removes every shape. Undoable.
    pub fn clear_canvas(&mut self) {
        if self.scene.is_empty() {
            return;
        }
        self.record_snapshot();
        self.scene.clear();
        self.selection.deselect_all();
        self.request_redraw();
    }
}
