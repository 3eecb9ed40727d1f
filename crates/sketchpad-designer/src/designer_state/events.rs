//! Pointer and key handling for designer state.

use sketchpad_core::{EditorKey, InputEvent, Modifiers, Point};
use tracing::{debug, trace, warn};

use super::{DesignerState, DrawingGesture, EditorMode, Gesture};
use crate::model::{DesignFreehand, DesignPolygon, DesignerShape, DrawingTool, Shape};
use crate::surface::DrawingSurface;

impl DesignerState {
    /// Processes one event to completion, then redraws `surface` if the
    /// event changed anything visible.
    pub fn handle_event(&mut self, event: &InputEvent, surface: &mut dyn DrawingSurface) {
        trace!(%event, "input");
        match *event {
            InputEvent::PrimaryDown { x, y, modifiers } => {
                self.primary_down(Point::new(x, y), modifiers)
            }
            InputEvent::PrimaryDrag { x, y, modifiers } => {
                self.primary_drag(Point::new(x, y), modifiers)
            }
            InputEvent::PrimaryUp { x, y, modifiers } => {
                self.primary_up(Point::new(x, y), modifiers)
            }
            InputEvent::SecondaryDown { x, y } => self.secondary_down(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => self.pointer_moved(Point::new(x, y)),
            InputEvent::Key { key } => self.handle_key(key),
        }
        if self.redraw_requested {
            self.redraw(surface);
        }
    }

    pub fn handle_key(&mut self, key: EditorKey) {
        match key {
            EditorKey::Delete => self.delete_selected(),
            EditorKey::Copy => self.copy_selected(),
            EditorKey::Cut => self.cut_selected(),
            EditorKey::Paste => self.paste(),
            EditorKey::PastePreview => self.begin_paste_preview(),
            EditorKey::Undo => self.undo(),
            EditorKey::Redo => self.redo(),
            EditorKey::Group => self.group_selected(),
            EditorKey::Ungroup => self.ungroup_selected(),
            EditorKey::SelectAll => self.select_all(),
            EditorKey::Escape => self.cancel(),
        }
    }

    pub fn primary_down(&mut self, p: Point, _modifiers: Modifiers) {
        self.pointer = Some(p);
        match self.mode {
            EditorMode::PastePreview => {
                self.mode = EditorMode::Idle;
                self.paste_at(p);
                self.request_redraw();
            }
            EditorMode::Drawing(tool) => self.begin_drawing(tool, p),
            EditorMode::Idle => {
                let clicked = self.scene.top_shape_at(p);
                trace!(?clicked, "press");
                self.gesture = Gesture::PendingSelect { clicked, anchor: p };
            }
        }
    }

    pub fn primary_drag(&mut self, p: Point, modifiers: Modifiers) {
        self.pointer = Some(p);
        match self.mode {
            EditorMode::Drawing(_) => self.continue_drawing(p),
            EditorMode::Idle => self.track_drag(p, modifiers),
            EditorMode::PastePreview => self.request_redraw(),
        }
    }

    pub fn primary_up(&mut self, p: Point, modifiers: Modifiers) {
        self.pointer = Some(p);
        match self.mode {
            EditorMode::Drawing(_) => self.finish_stroke(p),
            EditorMode::PastePreview => {}
            EditorMode::Idle => {
                // A release past the threshold with no drag events in
                // between still counts as a drag.
                self.track_drag(p, modifiers);
                match std::mem::replace(&mut self.gesture, Gesture::Idle) {
                    Gesture::PendingSelect { clicked, .. } => self.commit_click(clicked, modifiers),
                    Gesture::Dragging { .. } | Gesture::Idle => {}
                }
            }
        }
    }

    /// Secondary click finishes a polygon in progress.
    pub fn secondary_down(&mut self, p: Point) {
        self.pointer = Some(p);
        if let DrawingGesture::Polygon(_) = self.drawing {
            self.finish_polygon(p);
        }
    }

    pub fn pointer_moved(&mut self, p: Point) {
        self.pointer = Some(p);
        let previewing = matches!(self.drawing, DrawingGesture::Polygon(_))
            || self.mode == EditorMode::PastePreview;
        if previewing {
            self.request_redraw();
        }
    }

    /// Cancels a paste preview or discards an open polygon.
    pub fn cancel(&mut self) {
        let active = self.mode == EditorMode::PastePreview
            || !matches!(self.drawing, DrawingGesture::None);
        if active {
            self.abort_in_progress();
            self.request_redraw();
        }
    }

    fn begin_drawing(&mut self, tool: DrawingTool, p: Point) {
        let color = Some(self.color.clone());
        match tool {
            DrawingTool::Freehand => {
                let mut stroke = DesignFreehand::new(color);
                stroke.add_point(p);
                self.drawing = DrawingGesture::Freehand(stroke);
            }
            DrawingTool::Polygon => self.polygon_click(p),
            _ => {
                let Some(shape) = tool.bounded_shape(p, &self.color) else {
                    return;
                };
                self.record_snapshot();
                let id = self.scene.insert(shape);
                debug!(id, ?tool, "started shape");
                self.drawing = DrawingGesture::Bounded { id };
            }
        }
        self.request_redraw();
    }

    fn polygon_click(&mut self, p: Point) {
        let snap_radius = self.polygon_snap_radius;
        match &mut self.drawing {
            DrawingGesture::Polygon(polygon) if polygon.would_snap(p, snap_radius) => {
                polygon.close();
                debug!(points = polygon.points.len(), "polygon snapped closed");
                self.commit_polygon();
            }
            DrawingGesture::Polygon(polygon) => polygon.add_point(p),
            _ => {
                let mut polygon = DesignPolygon::new(Some(self.color.clone()));
                polygon.add_point(p);
                self.drawing = DrawingGesture::Polygon(polygon);
            }
        }
    }

    fn continue_drawing(&mut self, p: Point) {
        match &mut self.drawing {
            DrawingGesture::Bounded { id } => {
                let id = *id;
                if let Some(obj) = self.scene.get_mut(id) {
                    obj.shape.set_end_point(p);
                }
            }
            DrawingGesture::Freehand(stroke) => stroke.add_point(p),
            DrawingGesture::Polygon(_) | DrawingGesture::None => return,
        }
        self.request_redraw();
    }

    fn finish_stroke(&mut self, p: Point) {
        match std::mem::replace(&mut self.drawing, DrawingGesture::None) {
            DrawingGesture::Bounded { id } => {
                if let Some(obj) = self.scene.get_mut(id) {
                    obj.shape.set_end_point(p);
                }
                debug!(id, "finished shape");
            }
            DrawingGesture::Freehand(mut stroke) => {
                stroke.add_point(p);
                self.record_snapshot();
                let id = self.scene.insert(Shape::Freehand(stroke));
                debug!(id, "finished freehand stroke");
            }
            polygon @ DrawingGesture::Polygon(_) => {
                self.drawing = polygon;
                return;
            }
            DrawingGesture::None => return,
        }
        self.request_redraw();
    }

    /// Appends `p` and force-closes. Polygons left with two points or fewer
    /// are discarded.
    fn finish_polygon(&mut self, p: Point) {
        let DrawingGesture::Polygon(polygon) = &mut self.drawing else {
            return;
        };
        polygon.add_point(p);
        if polygon.close() {
            debug!(points = polygon.points.len(), "polygon finished");
            self.commit_polygon();
        } else {
            warn!(
                points = polygon.points.len(),
                "polygon needs more than two points; discarded"
            );
            self.drawing = DrawingGesture::None;
        }
        self.request_redraw();
    }

    fn commit_polygon(&mut self) {
        if let DrawingGesture::Polygon(polygon) =
            std::mem::replace(&mut self.drawing, DrawingGesture::None)
        {
            self.record_snapshot();
            self.scene.insert(Shape::Polygon(polygon));
            self.request_redraw();
        }
    }

    /// Recognizes a drag once the pointer leaves the threshold square, then
    /// moves the selection by each increment.
    fn track_drag(&mut self, p: Point, modifiers: Modifiers) {
        match self.gesture {
            Gesture::PendingSelect { clicked, anchor } => {
                let dx = p.x - anchor.x;
                let dy = p.y - anchor.y;
                if dx.abs().max(dy.abs()) <= self.drag_threshold {
                    return;
                }
                self.resolve_drag_selection(clicked, modifiers);
                debug!(
                    selected = self.selection.len(),
                    dx, dy, "drag recognized"
                );
                if !self.selection.is_empty() {
                    self.record_snapshot();
                }
                self.translate_selection(dx, dy);
                self.gesture = Gesture::Dragging { anchor: p };
            }
            Gesture::Dragging { anchor } => {
                self.translate_selection(p.x - anchor.x, p.y - anchor.y);
                self.gesture = Gesture::Dragging { anchor: p };
            }
            Gesture::Idle => {}
        }
    }

    /// Selection a drag acts on: the modifier adds the pressed shape, a plain
    /// drag collapses onto it unless it is already selected.
    fn resolve_drag_selection(&mut self, clicked: Option<u64>, modifiers: Modifiers) {
        match clicked {
            Some(id) if modifiers.contains(self.multi_select) => {
                self.selection.add(id);
            }
            Some(id) if !self.selection.is_selected(id) => self.selection.select_only(id),
            Some(_) => {}
            None if modifiers.contains(self.multi_select) => {}
            None => self.selection.deselect_all(),
        }
    }

    fn commit_click(&mut self, clicked: Option<u64>, modifiers: Modifiers) {
        if modifiers.contains(self.multi_select) {
            if let Some(id) = clicked {
                self.selection.toggle(id);
            }
        } else {
            match clicked {
                Some(id) => self.selection.select_only(id),
                None => self.selection.deselect_all(),
            }
        }
        trace!(selected = self.selection.len(), "click committed");
        self.request_redraw();
    }

    fn translate_selection(&mut self, dx: f64, dy: f64) {
        if self.selection.is_empty() || (dx == 0.0 && dy == 0.0) {
            return;
        }
        for obj in self.scene.iter_mut() {
            if self.selection.is_selected(obj.id) {
                obj.shape.translate(dx, dy);
            }
        }
        self.is_modified = true;
        self.request_redraw();
    }
}
