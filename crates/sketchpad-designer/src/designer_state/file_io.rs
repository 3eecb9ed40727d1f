//! File I/O operations (save, load, new) for designer state.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use super::{DesignerState, DrawingGesture, EditorMode, Gesture};
use crate::error::DesignerResult;
use crate::serialization::{load_shapes, save_shapes};

impl DesignerState {
    /// Serializes the scene, in z-order, to scene file text.
    pub fn save_to_string(&self) -> DesignerResult<String> {
        save_shapes(self.scene.shapes())
    }

    /// Replaces the scene with the shapes in `input`. Selection, clipboard
    /// and history are cleared. On error nothing changes.
    pub fn load_from_str(&mut self, input: &str) -> DesignerResult<()> {
        let shapes = load_shapes(input)?;
        self.reset_editing();
        self.scene.replace_all(shapes);
        self.request_redraw();
        Ok(())
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = self
            .save_to_string()
            .context("Failed to serialize scene")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write scene file {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.design_name = design_name_of(path);
        self.is_modified = false;
        info!(path = %path.display(), shapes = self.scene.len(), "saved scene");
        Ok(())
    }

    /// Load design from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        self.load_from_str(&text)
            .with_context(|| format!("Failed to load scene file {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.design_name = design_name_of(path);
        self.is_modified = false;
        info!(path = %path.display(), shapes = self.scene.len(), "loaded scene");
        Ok(())
    }

    /// Create new design.
    pub fn new_design(&mut self) {
        self.reset_editing();
        self.scene.clear();
        self.current_file_path = None;
        self.design_name = "Untitled".to_string();
        self.is_modified = false;
        self.request_redraw();
    }

    /// Name for a window title, with `*` when there are unsaved changes.
    pub fn display_name(&self) -> String {
        if self.is_modified {
            format!("{}*", self.design_name)
        } else {
            self.design_name.clone()
        }
    }

    fn reset_editing(&mut self) {
        self.selection.deselect_all();
        self.clipboard = None;
        self.history.clear();
        self.drawing = DrawingGesture::None;
        self.gesture = Gesture::Idle;
        if self.mode == EditorMode::PastePreview {
            self.mode = EditorMode::Idle;
        }
    }
}

fn design_name_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
