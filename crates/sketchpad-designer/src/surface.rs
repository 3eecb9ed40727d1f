//! Drawing surface abstraction.
//!
//! The editor never talks to a toolkit canvas directly. Shapes emit primitive
//! calls (line, polygon, rectangle, oval) against [`DrawingSurface`] and the
//! host decides how to put pixels on screen.

use sketchpad_core::Point;

/// Tag attached to the in-progress polygon preview line.
pub const PREVIEW_TAG: &str = "preview";
/// Tag attached to paste-preview outlines.
pub const PASTE_PREVIEW_TAG: &str = "paste_preview";

/// Stroke styling applied on top of a shape's own color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrokeStyle {
    /// Replaces the shape's own color when set
    pub outline: Option<String>,
    /// Dash pattern as (on, off) lengths; solid when `None`
    pub dash: Option<[u32; 2]>,
    /// Surface tag, so the item can later be deleted by tag
    pub tag: Option<String>,
}

impl StrokeStyle {
    /// Plain stroke in the shape's own color.
    pub fn solid() -> Self {
        Self::default()
    }

    /// Dashed stroke in a fixed color.
    pub fn dashed(color: impl Into<String>, dash: [u32; 2]) -> Self {
        Self {
            outline: Some(color.into()),
            dash: Some(dash),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Color to stroke with: the override if present, else the shape's own.
    pub fn stroke_color<'a>(&'a self, own: Option<&'a str>) -> Option<&'a str> {
        self.outline.as_deref().or(own)
    }
}

/// Primitive drawing operations the editor needs from a canvas.
pub trait DrawingSurface {
    /// Open polyline through `points`.
    fn draw_line(&mut self, points: &[Point], color: Option<&str>, style: &StrokeStyle);

    /// Closed outline through `points`.
    fn draw_polygon(&mut self, points: &[Point], outline: Option<&str>, style: &StrokeStyle);

    fn draw_rectangle(
        &mut self,
        corner1: Point,
        corner2: Point,
        outline: Option<&str>,
        style: &StrokeStyle,
    );

    fn draw_oval(&mut self, corner1: Point, corner2: Point, outline: Option<&str>, style: &StrokeStyle);

    /// Removes every item carrying `tag`.
    fn delete(&mut self, tag: &str);

    /// Removes everything.
    fn clear(&mut self);
}

/// A primitive call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line {
        points: Vec<Point>,
        color: Option<String>,
        style: StrokeStyle,
    },
    Polygon {
        points: Vec<Point>,
        outline: Option<String>,
        style: StrokeStyle,
    },
    Rectangle {
        corner1: Point,
        corner2: Point,
        outline: Option<String>,
        style: StrokeStyle,
    },
    Oval {
        corner1: Point,
        corner2: Point,
        outline: Option<String>,
        style: StrokeStyle,
    },
    Delete(String),
    Clear,
}

impl DrawCall {
    pub fn style(&self) -> Option<&StrokeStyle> {
        match self {
            DrawCall::Line { style, .. }
            | DrawCall::Polygon { style, .. }
            | DrawCall::Rectangle { style, .. }
            | DrawCall::Oval { style, .. } => Some(style),
            DrawCall::Delete(_) | DrawCall::Clear => None,
        }
    }
}

/// Surface that records calls as values instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call since construction.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls issued after the most recent `clear()`.
    pub fn frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DrawCall::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.calls[start..]
    }

    /// Number of `clear()` calls, i.e. full redraws.
    pub fn redraw_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Clear).count()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw_line(&mut self, points: &[Point], color: Option<&str>, style: &StrokeStyle) {
        self.calls.push(DrawCall::Line {
            points: points.to_vec(),
            color: color.map(str::to_string),
            style: style.clone(),
        });
    }

    fn draw_polygon(&mut self, points: &[Point], outline: Option<&str>, style: &StrokeStyle) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            outline: outline.map(str::to_string),
            style: style.clone(),
        });
    }

    fn draw_rectangle(
        &mut self,
        corner1: Point,
        corner2: Point,
        outline: Option<&str>,
        style: &StrokeStyle,
    ) {
        self.calls.push(DrawCall::Rectangle {
            corner1,
            corner2,
            outline: outline.map(str::to_string),
            style: style.clone(),
        });
    }

    fn draw_oval(&mut self, corner1: Point, corner2: Point, outline: Option<&str>, style: &StrokeStyle) {
        self.calls.push(DrawCall::Oval {
            corner1,
            corner2,
            outline: outline.map(str::to_string),
            style: style.clone(),
        });
    }

    fn delete(&mut self, tag: &str) {
        self.calls.push(DrawCall::Delete(tag.to_string()));
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }
}
