//! Headless host: a logging drawing surface and event-script replay.

use std::path::Path;

use anyhow::Context;
use sketchpad_core::{InputEvent, Point};
use sketchpad_designer::{DesignerShape, DesignerState, DrawingSurface, Shape, StrokeStyle};
use tracing::{info, trace};

/// Surface that draws nothing and logs each primitive at TRACE level.
#[derive(Debug, Default)]
pub struct TraceSurface {
    primitives: usize,
    frames: usize,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives drawn since construction.
    pub fn primitives(&self) -> usize {
        self.primitives
    }

    /// Full redraws since construction.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl DrawingSurface for TraceSurface {
    fn draw_line(&mut self, points: &[Point], color: Option<&str>, style: &StrokeStyle) {
        self.primitives += 1;
        trace!(points = points.len(), ?color, dash = ?style.dash, tag = ?style.tag, "line");
    }

    fn draw_polygon(&mut self, points: &[Point], outline: Option<&str>, style: &StrokeStyle) {
        self.primitives += 1;
        trace!(points = points.len(), ?outline, dash = ?style.dash, "polygon");
    }

    fn draw_rectangle(
        &mut self,
        corner1: Point,
        corner2: Point,
        outline: Option<&str>,
        style: &StrokeStyle,
    ) {
        self.primitives += 1;
        trace!(?corner1, ?corner2, ?outline, dash = ?style.dash, "rectangle");
    }

    fn draw_oval(&mut self, corner1: Point, corner2: Point, outline: Option<&str>, style: &StrokeStyle) {
        self.primitives += 1;
        trace!(?corner1, ?corner2, ?outline, dash = ?style.dash, "oval");
    }

    fn delete(&mut self, tag: &str) {
        trace!(tag, "delete");
    }

    fn clear(&mut self) {
        self.frames += 1;
        trace!(frame = self.frames, "clear");
    }
}

/// Reads a JSON array of input events.
pub fn load_events(path: &Path) -> anyhow::Result<Vec<InputEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse event script {}", path.display()))
}

/// Feeds `events` to `state` one at a time.
pub fn replay(state: &mut DesignerState, events: &[InputEvent], surface: &mut dyn DrawingSurface) {
    for event in events {
        state.handle_event(event, surface);
    }
    info!(
        events = events.len(),
        shapes = state.scene.len(),
        selected = state.selection.len(),
        "replay finished"
    );
}

/// One-line summary of a shape: kind, color, extent and group size.
pub fn describe_shape(shape: &Shape) -> String {
    let color = shape.color().unwrap_or("-");
    let extent = match shape.bounds() {
        Some((x1, y1, x2, y2)) => format!("({}, {})-({}, {})", x1, y1, x2, y2),
        None => "empty".to_string(),
    };
    match shape {
        Shape::Group(group) => format!("{} of {} {}", shape.shape_type(), group.len(), extent),
        _ => format!("{} {} {}", shape.shape_type(), color, extent),
    }
}
