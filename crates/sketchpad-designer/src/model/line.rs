use sketchpad_core::{point_near_segment, Point};

use super::{corner_bounds, Bounds, DesignerShape, ShapeType, LINE_HIT_TOLERANCE};
use crate::error::DesignerResult;
use crate::serialization::ShapeRecord;
use crate::surface::{DrawingSurface, StrokeStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct DesignLine {
    pub start_point: Point,
    pub end_point: Point,
    pub color: Option<String>,
}

impl DesignLine {
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
}

impl DesignerShape for DesignLine {
    fn draw(&mut self, surface: &mut dyn DrawingSurface, style: &StrokeStyle) {
        surface.draw_line(
            &[self.start_point, self.end_point],
            style.stroke_color(self.color.as_deref()),
            style,
        );
    }

    fn contains_point(&self, p: Point) -> bool {
        point_near_segment(p, self.start_point, self.end_point, LINE_HIT_TOLERANCE)
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
            ShapeType::Line,
            self.color.clone(),
            self.start_point,
            self.end_point,
        )
    }
}
