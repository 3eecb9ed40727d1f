use sketchpad_core::{point_in_ellipse, Point};

use super::{corner_bounds, Bounds, DesignerShape, ShapeType};
use crate::error::DesignerResult;
use crate::serialization::ShapeRecord;
use crate::surface::{DrawingSurface, StrokeStyle};

/// Ellipse whose axes are forced equal when drawn.
///
/// Like [`super::DesignSquare`], the stored `end_point` is only rewritten by
/// `draw`: the radius is `floor(min(|dx|, |dy|) / 2)` and the end point becomes
/// `start + (2r, 2r)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignCircle {
    pub start_point: Point,
    pub end_point: Point,
    pub color: Option<String>,
}

impl DesignCircle {
    pub fn new(start_point: Point, end_point: Point, color: Option<String>) -> Self {
        Self {
            start_point,
            end_point,
            color,
        }
    }

    pub fn from_record(record: &ShapeRecord) -> DesignerResult<Self> {
        let (start, end) = record.corners()?;
        Ok(Self::new(start, end, record.color.clone()))
    }

    pub fn radius(&self) -> f64 {
        ((self.end_point.x - self.start_point.x)
            .abs()
            .min((self.end_point.y - self.start_point.y).abs())
            / 2.0)
            .floor()
    }

    /// Rewrites `end_point` so the bounding box is square.
    pub fn equalize(&mut self) {
        let diameter = 2.0 * self.radius();
        self.end_point = self.start_point.translated(diameter, diameter);
    }
}

impl DesignerShape for DesignCircle {
    fn draw(&mut self, surface: &mut dyn DrawingSurface, style: &StrokeStyle) {
        self.equalize();
        surface.draw_oval(
            self.start_point,
            self.end_point,
            style.stroke_color(self.color.as_deref()),
            style,
        );
    }

    fn contains_point(&self, p: Point) -> bool {
        point_in_ellipse(p, self.start_point, self.end_point)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start_point = self.start_point.translated(dx, dy);
        self.end_point = self.end_point.translated(dx, dy);
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(corner_bounds(self.start_point, self.end_point))
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn to_record(&self) -> ShapeRecord {
        ShapeRecord::bounded(
            ShapeType::Circle,
            self.color.clone(),
            self.start_point,
            self.end_point,
        )
    }
}
