use super::shapes::paste_offset;
use super::{DesignerState, DrawingGesture, EditorMode};
use crate::model::DesignerShape;
use crate::surface::{DrawingSurface, StrokeStyle, PASTE_PREVIEW_TAG, PREVIEW_TAG};

impl DesignerState {
    /// Clears `surface` and draws the whole scene, then whatever is in
    /// progress on top: the open stroke or polygon, the polygon preview line
    /// and the paste preview.
    pub fn redraw(&mut self, surface: &mut dyn DrawingSurface) {
        surface.clear();

        let plain = StrokeStyle::solid();
        for obj in self.scene.iter_mut() {
            let style = if self.selection.is_selected(obj.id) {
                &self.selection_style
            } else {
                &plain
            };
            obj.shape.draw(surface, style);
        }

        match &mut self.drawing {
            DrawingGesture::Freehand(stroke) => stroke.draw(surface, &plain),
            DrawingGesture::Polygon(polygon) => {
                polygon.draw(surface, &plain);
                if let (Some(cursor), false) = (self.pointer, polygon.points.is_empty()) {
                    let preview = self.preview_style.clone().with_tag(PREVIEW_TAG);
                    surface.delete(PREVIEW_TAG);
                    surface.draw_line(
                        &polygon.preview_points(cursor),
                        preview.outline.as_deref(),
                        &preview,
                    );
                }
            }
            DrawingGesture::Bounded { .. } | DrawingGesture::None => {}
        }

        if self.mode == EditorMode::PastePreview {
            if let (Some(cursor), Some(clipboard)) = (self.pointer, &self.clipboard) {
                let preview = self.preview_style.clone().with_tag(PASTE_PREVIEW_TAG);
                let (dx, dy) = paste_offset(clipboard, cursor);
                surface.delete(PASTE_PREVIEW_TAG);
                for shape in clipboard {
                    let mut ghost = shape.clone();
                    ghost.translate(dx, dy);
                    ghost.draw(surface, &preview);
                }
            }
        }

        self.redraw_requested = false;
    }
}
