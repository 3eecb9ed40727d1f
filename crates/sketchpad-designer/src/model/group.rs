use sketchpad_core::Point;

use super::{union_bounds, Bounds, DesignerShape, Shape};
use crate::error::{DesignerError, DesignerResult};
use crate::serialization::{ShapeRecord, ShapeRegistry};
use crate::surface::{DrawingSurface, StrokeStyle};

/// Composite shape. Members are owned exclusively while grouped and every
/// operation recurses into them in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignGroup {
    pub shapes: Vec<Shape>,
}

impl DesignGroup {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn from_record(record: &ShapeRecord, registry: &ShapeRegistry) -> DesignerResult<Self> {
        let members = record
            .shapes
            .as_ref()
            .ok_or_else(|| DesignerError::malformed("Group", "missing field 'shapes'"))?;
        let shapes = members
            .iter()
            .map(|member| registry.build(member))
            .collect::<DesignerResult<Vec<_>>>()?;
        Ok(Self { shapes })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

impl DesignerShape for DesignGroup {
    fn draw(&mut self, surface: &mut dyn DrawingSurface, style: &StrokeStyle) {
        for shape in &mut self.shapes {
            shape.draw(surface, style);
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        self.shapes.iter().any(|s| s.contains_point(p))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for shape in &mut self.shapes {
            shape.translate(dx, dy);
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        self.shapes
            .iter()
            .fold(None, |acc, s| union_bounds(acc, s.bounds()))
    }

    fn color(&self) -> Option<&str> {
        None
    }

    fn to_record(&self) -> ShapeRecord {
        ShapeRecord::group(self.shapes.iter().map(|s| s.to_record()).collect())
    }
}
