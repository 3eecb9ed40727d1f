//! # SketchPad Designer
//!
//! Shape model and editing controller for the SketchPad vector editor.
//!
//! ## Core Components
//!
//! - **Shapes**: freehand strokes, polygons, lines, rectangles, squares,
//!   ellipses, circles and groups behind one [`DesignerShape`] contract
//! - **Scene**: ordered top-level shapes with stable ids
//! - **Selection**: the active selection, ordered through the scene
//! - **History**: linear undo/redo over scene snapshots
//! - **Designer state**: turns pointer and key events into edits
//! - **Serialization**: JSON scene files and the shape registry
//! - **Surface**: the drawing primitives a host canvas provides
//!
//! ## Architecture
//!
//! ```text
//! InputEvent ──> DesignerState ──> Scene / SelectionManager / UndoRedoManager
//!                     │
//!                     └── redraw ──> DrawingSurface (host canvas)
//!
//! Scene <──> serialization (ShapeRecord, ShapeRegistry) <──> scene file
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sketchpad_core::InputEvent;
//! use sketchpad_designer::{DesignerState, DrawingTool, EditorMode, RecordingSurface};
//!
//! let mut state = DesignerState::new();
//! let mut surface = RecordingSurface::new();
//!
//! state.set_mode(EditorMode::Drawing(DrawingTool::Rectangle));
//! state.handle_event(&InputEvent::primary_down(10.0, 10.0), &mut surface);
//! state.handle_event(&InputEvent::primary_drag(40.0, 30.0), &mut surface);
//! state.handle_event(&InputEvent::primary_up(40.0, 30.0), &mut surface);
//!
//! assert_eq!(state.scene.len(), 1);
//! ```

pub mod designer_state;
pub mod error;
pub mod history;
pub mod model;
pub mod scene;
pub mod selection_manager;
pub mod serialization;
pub mod surface;

pub use designer_state::{DesignerState, EditorMode, Gesture};
pub use error::{DesignerError, DesignerResult};
pub use history::UndoRedoManager;
pub use model::{
    DesignCircle, DesignEllipse, DesignFreehand, DesignGroup, DesignLine, DesignPolygon,
    DesignRectangle, DesignSquare, DesignerShape, DrawingTool, Shape, ShapeType,
};
pub use scene::{DrawingObject, Scene, SceneSnapshot};
pub use selection_manager::SelectionManager;
pub use serialization::{load_shapes, load_shapes_from_reader, save_shapes, ShapeRecord, ShapeRegistry};
pub use surface::{DrawCall, DrawingSurface, RecordingSurface, StrokeStyle};
