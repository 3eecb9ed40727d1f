//! Designer state: the editing/selection controller.
//!
//! Turns a stream of [`InputEvent`]s into scene edits and redraw requests.
//!
//! This module is split into submodules:
//! - `events`: pointer and key dispatch, the click/drag state machine
//! - `shapes`: delete, group/ungroup, clipboard, select all, clear
//! - `history`: undo/redo over scene snapshots
//! - `file_io`: save/load and document state
//! - `render`: full redraw onto a [`DrawingSurface`]
//!
//! [`InputEvent`]: sketchpad_core::InputEvent
//! [`DrawingSurface`]: crate::surface::DrawingSurface

mod events;
mod file_io;
mod history;
mod render;
mod shapes;

use std::path::PathBuf;

use sketchpad_core::{Modifiers, Point};
use sketchpad_settings::Config;
use tracing::debug;

use crate::history::UndoRedoManager;
use crate::model::{DesignFreehand, DesignPolygon, DrawingTool, Shape, ShapeType};
use crate::scene::Scene;
use crate::selection_manager::SelectionManager;
use crate::surface::StrokeStyle;

/// What a primary press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Presses select and drag shapes.
    #[default]
    Idle,
    /// Presses create shapes of the given kind.
    Drawing(DrawingTool),
    /// The clipboard follows the pointer and the next press commits it.
    PastePreview,
}

/// Click/drag disambiguation in [`EditorMode::Idle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    /// Button down, not yet past the drag threshold. Selection changes are
    /// deferred until release or drag recognition.
    PendingSelect { clicked: Option<u64>, anchor: Point },
    /// Moving the selection; `anchor` is the last applied pointer position.
    Dragging { anchor: Point },
}

/// Shape under construction in [`EditorMode::Drawing`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawingGesture {
    None,
    /// Bounded shape already in the scene; drags move its end point.
    Bounded { id: u64 },
    /// Stroke held outside the scene until release.
    Freehand(DesignFreehand),
    /// Polygon held outside the scene until it closes.
    Polygon(DesignPolygon),
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub scene: Scene,
    pub selection: SelectionManager,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
    pub(crate) history: UndoRedoManager,
    pub(crate) mode: EditorMode,
    pub(crate) gesture: Gesture,
    pub(crate) drawing: DrawingGesture,
    pub(crate) clipboard: Option<Vec<Shape>>,
    pub(crate) pointer: Option<Point>,
    pub(crate) color: String,
    pub(crate) drag_threshold: f64,
    pub(crate) polygon_snap_radius: f64,
    pub(crate) multi_select: Modifiers,
    pub(crate) selection_style: StrokeStyle,
    pub(crate) preview_style: StrokeStyle,
    pub(crate) redraw_requested: bool,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a designer state tuned by `config`.
    pub fn with_config(config: &Config) -> Self {
        let appearance = &config.appearance;
        Self {
            scene: Scene::new(),
            selection: SelectionManager::new(),
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
            history: UndoRedoManager::new(config.history.max_depth),
            mode: EditorMode::Idle,
            gesture: Gesture::Idle,
            drawing: DrawingGesture::None,
            clipboard: None,
            pointer: None,
            color: appearance.default_color.clone(),
            drag_threshold: config.interaction.drag_threshold,
            polygon_snap_radius: config.interaction.polygon_snap_radius,
            multi_select: config.interaction.multi_select_modifier.mask(),
            selection_style: StrokeStyle::dashed(
                appearance.selection_color.clone(),
                appearance.selection_dash,
            ),
            preview_style: StrokeStyle::dashed(
                appearance.preview_color.clone(),
                appearance.preview_dash,
            ),
            redraw_requested: true,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches mode. Any stroke or polygon in progress is discarded and a
    /// paste preview is cancelled. Asking for [`EditorMode::PastePreview`]
    /// goes through [`DesignerState::begin_paste_preview`].
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == EditorMode::PastePreview {
            self.begin_paste_preview();
            return;
        }
        self.abort_in_progress();
        debug!(?mode, "mode changed");
        self.mode = mode;
        self.request_redraw();
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Color given to newly drawn shapes.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Last pointer position seen in any event.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn clipboard(&self) -> Option<&[Shape]> {
        self.clipboard.as_deref()
    }

    /// Kind of the freehand stroke or polygon being built, if any.
    pub fn in_progress(&self) -> Option<ShapeType> {
        match &self.drawing {
            DrawingGesture::Freehand(_) => Some(ShapeType::Freehand),
            DrawingGesture::Polygon(_) => Some(ShapeType::Polygon),
            DrawingGesture::Bounded { id } => self.scene.get(*id).map(|o| o.shape.shape_type()),
            DrawingGesture::None => None,
        }
    }

    /// Points of the freehand stroke or polygon being built.
    pub fn in_progress_points(&self) -> &[Point] {
        match &self.drawing {
            DrawingGesture::Freehand(f) => &f.points,
            DrawingGesture::Polygon(p) => &p.points,
            DrawingGesture::Bounded { .. } | DrawingGesture::None => &[],
        }
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Drops unfinished strokes and polygons and leaves paste preview.
    pub(crate) fn abort_in_progress(&mut self) {
        match std::mem::replace(&mut self.drawing, DrawingGesture::None) {
            DrawingGesture::Freehand(_) => debug!("discarded freehand stroke"),
            DrawingGesture::Polygon(p) => {
                debug!(points = p.points.len(), "discarded open polygon")
            }
            DrawingGesture::Bounded { .. } | DrawingGesture::None => {}
        }
        if self.mode == EditorMode::PastePreview {
            self.mode = EditorMode::Idle;
        }
        self.gesture = Gesture::Idle;
    }
}
