use sketchpad_core::{
    euclidean_distance, point_in_polygon_ray_cast, point_on_polygon_boundary, Point,
};

use super::{point_bounds, Bounds, DesignerShape, ShapeType, LINE_HIT_TOLERANCE};
use crate::error::DesignerResult;
use crate::serialization::ShapeRecord;
use crate::surface::{DrawingSurface, StrokeStyle};

/// Polygon built one vertex per click.
///
/// A closed polygon stores its closing vertex explicitly, so `points` reads
/// `[p0, p1, ..., pn, p0]` once [`DesignPolygon::close`] has run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignPolygon {
    pub points: Vec<Point>,
    pub closed: bool,
    pub color: Option<String>,
}

impl DesignPolygon {
    pub fn new(color: Option<String>) -> Self {
        Self {
            points: Vec::new(),
            closed: false,
            color,
        }
    }

    /// Rebuilds from a record. Files without a `closed` field infer it from
    /// the ring: more than two points with the last equal to the first.
    pub fn from_record(record: &ShapeRecord) -> DesignerResult<Self> {
        let points = record.point_list()?;
        let closed = record
            .closed
            .unwrap_or_else(|| points.len() > 2 && points.first() == points.last());
        Ok(Self {
            points,
            closed,
            color: record.color.clone(),
        })
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    /// A click at `p` would close the ring: enough vertices exist and `p`
    /// falls inside the snap radius of the first one.
    pub fn would_snap(&self, p: Point, radius: f64) -> bool {
        match self.points.first() {
            Some(first) if self.points.len() > 2 => euclidean_distance(p, *first) < radius,
            _ => false,
        }
    }

    /// Appends the first vertex and marks the ring closed. Returns `false`
    /// and leaves the polygon untouched when it has two points or fewer.
    pub fn close(&mut self) -> bool {
        if self.points.len() <= 2 {
            return false;
        }
        let first = self.points[0];
        self.points.push(first);
        self.closed = true;
        true
    }

    /// Vertices followed by the cursor, for the rubber-band preview.
    pub fn preview_points(&self, cursor: Point) -> Vec<Point> {
        let mut points = self.points.clone();
        points.push(cursor);
        points
    }
}

impl DesignerShape for DesignPolygon {
    fn draw(&mut self, surface: &mut dyn DrawingSurface, style: &StrokeStyle) {
        if self.points.len() < 2 {
            return;
        }
        let color = style.stroke_color(self.color.as_deref());
        if self.closed {
            surface.draw_polygon(&self.points, color, style);
        } else {
            surface.draw_line(&self.points, color, style);
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        point_on_polygon_boundary(p, &self.points, LINE_HIT_TOLERANCE)
            || point_in_polygon_ray_cast(p, &self.points)
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
        let mut record = ShapeRecord::freeform(ShapeType::Polygon, self.color.clone(), &self.points);
        record.closed = Some(self.closed);
        record
    }
}
