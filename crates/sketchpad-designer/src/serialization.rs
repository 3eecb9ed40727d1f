//! Persistence codec for scene files.
//!
//! A scene file is a JSON array of shape records in z-order. Each record
//! carries a `type` discriminator and a `color` (null for groups) plus the
//! fields of its variant:
//!
//! ```json
//! [
//!   {"type": "Line", "color": "black", "start_point": [0, 0], "end_point": [10, 5]},
//!   {"type": "Polygon", "color": "blue", "points": [[0, 0], [10, 0], [5, 8], [0, 0]], "closed": true},
//!   {"type": "Group", "color": null, "shapes": [ ... ]}
//! ]
//! ```
//!
//! Records are turned back into shapes through a [`ShapeRegistry`] that maps
//! each discriminator to its builder.

use std::collections::HashMap;
use std::io::Read;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use sketchpad_core::Point;

use crate::error::{DesignerError, DesignerResult};
use crate::model::{
    DesignCircle, DesignEllipse, DesignFreehand, DesignGroup, DesignLine, DesignPolygon,
    DesignRectangle, DesignSquare, DesignerShape, Shape, ShapeType,
};

/// Structured form of a single shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(rename = "type")]
    pub shape_type: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[f64; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_point: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_point: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<ShapeRecord>>,
}

impl ShapeRecord {
    fn empty(shape_type: ShapeType, color: Option<String>) -> Self {
        Self {
            shape_type: shape_type.as_str().to_string(),
            color,
            points: None,
            closed: None,
            start_point: None,
            end_point: None,
            shapes: None,
        }
    }

    /// Record for a start/end shape.
    pub fn bounded(shape_type: ShapeType, color: Option<String>, start: Point, end: Point) -> Self {
        Self {
            start_point: Some(start.into()),
            end_point: Some(end.into()),
            ..Self::empty(shape_type, color)
        }
    }

    /// Record for a point-list shape.
    pub fn freeform(shape_type: ShapeType, color: Option<String>, points: &[Point]) -> Self {
        Self {
            points: Some(points.iter().map(|p| (*p).into()).collect()),
            ..Self::empty(shape_type, color)
        }
    }

    pub fn group(shapes: Vec<ShapeRecord>) -> Self {
        Self {
            shapes: Some(shapes),
            ..Self::empty(ShapeType::Group, None)
        }
    }

    /// `start_point` and `end_point`, both required.
    pub fn corners(&self) -> DesignerResult<(Point, Point)> {
        let start = self
            .start_point
            .ok_or_else(|| self.missing("start_point"))?;
        let end = self.end_point.ok_or_else(|| self.missing("end_point"))?;
        Ok((start.into(), end.into()))
    }

    /// `points`, required but possibly empty.
    pub fn point_list(&self) -> DesignerResult<Vec<Point>> {
        let points = self.points.as_ref().ok_or_else(|| self.missing("points"))?;
        Ok(points.iter().map(|p| Point::from(*p)).collect())
    }

    fn missing(&self, field: &str) -> DesignerError {
        DesignerError::malformed(self.shape_type.clone(), format!("missing field '{}'", field))
    }
}

/// Builds a shape from its record. Groups recurse through the registry.
pub type ShapeBuilder = fn(&ShapeRecord, &ShapeRegistry) -> DesignerResult<Shape>;

/// Discriminator to builder table.
#[derive(Clone, Default)]
pub struct ShapeRegistry {
    builders: HashMap<&'static str, ShapeBuilder>,
}

impl std::fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.builders.keys().collect();
        names.sort();
        f.debug_struct("ShapeRegistry").field("shapes", &names).finish()
    }
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with every built-in variant.
    pub fn with_builtin_shapes() -> Self {
        let mut registry = Self::new();
        registry.register(ShapeType::Freehand.as_str(), |r, _| {
            DesignFreehand::from_record(r).map(Shape::Freehand)
        });
        registry.register(ShapeType::Polygon.as_str(), |r, _| {
            DesignPolygon::from_record(r).map(Shape::Polygon)
        });
        registry.register(ShapeType::Line.as_str(), |r, _| {
            DesignLine::from_record(r).map(Shape::Line)
        });
        registry.register(ShapeType::Rectangle.as_str(), |r, _| {
            DesignRectangle::from_record(r).map(Shape::Rectangle)
        });
        registry.register(ShapeType::Square.as_str(), |r, _| {
            DesignSquare::from_record(r).map(Shape::Square)
        });
        registry.register(ShapeType::Ellipse.as_str(), |r, _| {
            DesignEllipse::from_record(r).map(Shape::Ellipse)
        });
        registry.register(ShapeType::Circle.as_str(), |r, _| {
            DesignCircle::from_record(r).map(Shape::Circle)
        });
        registry.register(ShapeType::Group.as_str(), |r, reg| {
            DesignGroup::from_record(r, reg).map(Shape::Group)
        });
        registry
    }

    /// Process-wide registry of the built-in variants.
    pub fn global() -> &'static ShapeRegistry {
        static REGISTRY: OnceLock<ShapeRegistry> = OnceLock::new();
        REGISTRY.get_or_init(ShapeRegistry::with_builtin_shapes)
    }

    /// Adds or replaces the builder for `shape_type`.
    pub fn register(&mut self, shape_type: &'static str, builder: ShapeBuilder) {
        self.builders.insert(shape_type, builder);
    }

    pub fn is_registered(&self, shape_type: &str) -> bool {
        self.builders.contains_key(shape_type)
    }

    pub fn build(&self, record: &ShapeRecord) -> DesignerResult<Shape> {
        let builder = self
            .builders
            .get(record.shape_type.as_str())
            .ok_or_else(|| DesignerError::UnknownShapeType {
                shape_type: record.shape_type.clone(),
            })?;
        builder(record, self)
    }
}

impl Shape {
    /// Rebuilds a shape through the built-in registry.
    pub fn from_record(record: &ShapeRecord) -> DesignerResult<Shape> {
        ShapeRegistry::global().build(record)
    }
}

/// Serializes shapes, in order, to the scene file text.
pub fn save_shapes<'a, I>(shapes: I) -> DesignerResult<String>
where
    I: IntoIterator<Item = &'a Shape>,
{
    let records: Vec<ShapeRecord> = shapes.into_iter().map(|s| s.to_record()).collect();
    serde_json::to_string_pretty(&records).map_err(DesignerError::from)
}

/// Parses scene file text into shapes. All or nothing: the first bad record
/// fails the whole load.
pub fn load_shapes(input: &str) -> DesignerResult<Vec<Shape>> {
    let records: Vec<ShapeRecord> = serde_json::from_str(input)?;
    build_all(&records)
}

/// Like [`load_shapes`] but reads from any byte stream.
pub fn load_shapes_from_reader<R: Read>(reader: R) -> DesignerResult<Vec<Shape>> {
    let records: Vec<ShapeRecord> = serde_json::from_reader(reader)?;
    build_all(&records)
}

fn build_all(records: &[ShapeRecord]) -> DesignerResult<Vec<Shape>> {
    let registry = ShapeRegistry::global();
    records.iter().map(|r| registry.build(r)).collect()
}
