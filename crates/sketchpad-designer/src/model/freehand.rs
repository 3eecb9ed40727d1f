use sketchpad_core::{point_within_radius, Point};

use super::{point_bounds, Bounds, DesignerShape, ShapeType, FREEHAND_HIT_RADIUS};
use crate::error::DesignerResult;
use crate::serialization::ShapeRecord;
use crate::surface::{DrawingSurface, StrokeStyle};

/// Stroke sampled from pointer drag events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignFreehand {
    pub points: Vec<Point>,
    pub color: Option<String>,
}

impl DesignFreehand {
    pub fn new(color: Option<String>) -> Self {
        Self {
            points: Vec::new(),
            color,
        }
    }

    pub fn from_record(record: &ShapeRecord) -> DesignerResult<Self> {
        Ok(Self {
            points: record.point_list()?,
            color: record.color.clone(),
        })
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }
}

impl DesignerShape for DesignFreehand {
    fn draw(&mut self, surface: &mut dyn DrawingSurface, style: &StrokeStyle) {
        if self.points.len() > 1 {
            surface.draw_line(&self.points, style.stroke_color(self.color.as_deref()), style);
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        self.points
            .iter()
            .any(|q| point_within_radius(p, *q, FREEHAND_HIT_RADIUS))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        point_bounds(&self.points)
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn to_record(&self) -> ShapeRecord {
        ShapeRecord::freeform(ShapeType::Freehand, self.color.clone(), &self.points)
    }
}
