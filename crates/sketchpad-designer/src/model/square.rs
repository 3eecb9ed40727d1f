use sketchpad_core::{point_in_axis_aligned_box, Point};

use super::{corner_bounds, Bounds, DesignerShape, ShapeType};
use crate::error::DesignerResult;
use crate::serialization::ShapeRecord;
use crate::surface::{DrawingSurface, StrokeStyle};

/// Rectangle whose sides are forced equal when drawn.
///
/// The stored `end_point` is whatever the gesture or file supplied. Only
/// [`DesignerShape::draw`] snaps it to `start + (side, side)` with
/// `side = min(|dx|, |dy|)`, always extending toward +x/+y from the start
/// corner. Hit testing between draws therefore sees the unequalized box.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSquare {
    pub start_point: Point,
    pub end_point: Point,
    pub color: Option<String>,
}

impl DesignSquare {
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

    /// Rewrites `end_point` so the box is square.
    pub fn equalize(&mut self) {
        let side = (self.end_point.x - self.start_point.x)
            .abs()
            .min((self.end_point.y - self.start_point.y).abs());
        self.end_point = self.start_point.translated(side, side);
    }
}

impl DesignerShape for DesignSquare {
    fn draw(&mut self, surface: &mut dyn DrawingSurface, style: &StrokeStyle) {
        self.equalize();
        surface.draw_rectangle(
            self.start_point,
            self.end_point,
            style.stroke_color(self.color.as_deref()),
            style,
        );
    }

    fn contains_point(&self, p: Point) -> bool {
        point_in_axis_aligned_box(p, self.start_point, self.end_point)
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
            ShapeType::Square,
            self.color.clone(),
            self.start_point,
            self.end_point,
        )
    }
}
