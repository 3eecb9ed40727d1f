use sketchpad_core::Point;

use crate::serialization::ShapeRecord;
use crate::surface::{DrawingSurface, StrokeStyle};

mod circle;
mod ellipse;
mod freehand;
mod group;
mod line;
mod polygon;
mod rectangle;
mod square;

pub use circle::DesignCircle;
pub use ellipse::DesignEllipse;
pub use freehand::DesignFreehand;
pub use group::DesignGroup;
pub use line::DesignLine;
pub use polygon::DesignPolygon;
pub use rectangle::DesignRectangle;
pub use square::DesignSquare;

/// Hit distance (px) from a line or polygon edge.
pub const LINE_HIT_TOLERANCE: f64 = 5.0;
/// Hit radius (px, per axis) around each freehand sample.
pub const FREEHAND_HIT_RADIUS: f64 = 10.0;

/// Axis-aligned extent as `(min_x, min_y, max_x, max_y)`.
pub type Bounds = (f64, f64, f64, f64);

/// Capabilities shared by every shape variant.
pub trait DesignerShape {
    /// Emits the shape onto `surface`. Constrained variants (square, circle)
    /// recompute their end point here, which is why drawing takes `&mut self`.
    fn draw(&mut self, surface: &mut dyn DrawingSurface, style: &StrokeStyle);

    fn contains_point(&self, p: Point) -> bool;

    /// Pure translation of every stored coordinate.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Extent of the stored coordinates; `None` for shapes with no points.
    fn bounds(&self) -> Option<Bounds>;

    fn color(&self) -> Option<&str>;

    fn to_record(&self) -> ShapeRecord;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Freehand,
    Polygon,
    Line,
    Rectangle,
    Square,
    Ellipse,
    Circle,
    Group,
}

impl ShapeType {
    /// Discriminator written to the `type` field of persisted records.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::Freehand => "Freehand",
            ShapeType::Polygon => "Polygon",
            ShapeType::Line => "Line",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Square => "Square",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Circle => "Circle",
            ShapeType::Group => "Group",
        }
    }

    pub const ALL: [ShapeType; 8] = [
        ShapeType::Freehand,
        ShapeType::Polygon,
        ShapeType::Line,
        ShapeType::Rectangle,
        ShapeType::Square,
        ShapeType::Ellipse,
        ShapeType::Circle,
        ShapeType::Group,
    ];
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tools that create shapes from pointer gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingTool {
    Freehand,
    Polygon,
    Line,
    Rectangle,
    Square,
    Ellipse,
    Circle,
}

impl DrawingTool {
    /// Tools that build a point list instead of a start/end pair.
    pub fn accumulates_points(self) -> bool {
        matches!(self, DrawingTool::Freehand | DrawingTool::Polygon)
    }

    /// Degenerate bounded shape anchored at `start`, or `None` for
    /// point-accumulating tools.
    pub fn bounded_shape(self, start: Point, color: &str) -> Option<Shape> {
        let color = Some(color.to_string());
        let shape = match self {
            DrawingTool::Line => Shape::Line(DesignLine::new(start, start, color)),
            DrawingTool::Rectangle => Shape::Rectangle(DesignRectangle::new(start, start, color)),
            DrawingTool::Square => Shape::Square(DesignSquare::new(start, start, color)),
            DrawingTool::Ellipse => Shape::Ellipse(DesignEllipse::new(start, start, color)),
            DrawingTool::Circle => Shape::Circle(DesignCircle::new(start, start, color)),
            DrawingTool::Freehand | DrawingTool::Polygon => return None,
        };
        Some(shape)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Freehand(DesignFreehand),
    Polygon(DesignPolygon),
    Line(DesignLine),
    Rectangle(DesignRectangle),
    Square(DesignSquare),
    Ellipse(DesignEllipse),
    Circle(DesignCircle),
    Group(DesignGroup),
}

impl DesignerShape for Shape {
    fn draw(&mut self, surface: &mut dyn DrawingSurface, style: &StrokeStyle) {
        match self {
            Shape::Freehand(s) => s.draw(surface, style),
            Shape::Polygon(s) => s.draw(surface, style),
            Shape::Line(s) => s.draw(surface, style),
            Shape::Rectangle(s) => s.draw(surface, style),
            Shape::Square(s) => s.draw(surface, style),
            Shape::Ellipse(s) => s.draw(surface, style),
            Shape::Circle(s) => s.draw(surface, style),
            Shape::Group(s) => s.draw(surface, style),
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        match self {
            Shape::Freehand(s) => s.contains_point(p),
            Shape::Polygon(s) => s.contains_point(p),
            Shape::Line(s) => s.contains_point(p),
            Shape::Rectangle(s) => s.contains_point(p),
            Shape::Square(s) => s.contains_point(p),
            Shape::Ellipse(s) => s.contains_point(p),
            Shape::Circle(s) => s.contains_point(p),
            Shape::Group(s) => s.contains_point(p),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Freehand(s) => s.translate(dx, dy),
            Shape::Polygon(s) => s.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Square(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Group(s) => s.translate(dx, dy),
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Freehand(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Square(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }

    fn color(&self) -> Option<&str> {
        match self {
            Shape::Freehand(s) => s.color(),
            Shape::Polygon(s) => s.color(),
            Shape::Line(s) => s.color(),
            Shape::Rectangle(s) => s.color(),
            Shape::Square(s) => s.color(),
            Shape::Ellipse(s) => s.color(),
            Shape::Circle(s) => s.color(),
            Shape::Group(s) => s.color(),
        }
    }

    fn to_record(&self) -> ShapeRecord {
        match self {
            Shape::Freehand(s) => s.to_record(),
            Shape::Polygon(s) => s.to_record(),
            Shape::Line(s) => s.to_record(),
            Shape::Rectangle(s) => s.to_record(),
            Shape::Square(s) => s.to_record(),
            Shape::Ellipse(s) => s.to_record(),
            Shape::Circle(s) => s.to_record(),
            Shape::Group(s) => s.to_record(),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Freehand(_) => ShapeType::Freehand,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Line(_) => ShapeType::Line,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Square(_) => ShapeType::Square,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Group(_) => ShapeType::Group,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group(_))
    }

    /// Moves the end point of a bounded shape; other variants are untouched.
    pub fn set_end_point(&mut self, end: Point) {
        match self {
            Shape::Line(s) => s.end_point = end,
            Shape::Rectangle(s) => s.end_point = end,
            Shape::Square(s) => s.end_point = end,
            Shape::Ellipse(s) => s.end_point = end,
            Shape::Circle(s) => s.end_point = end,
            Shape::Freehand(_) | Shape::Polygon(_) | Shape::Group(_) => {}
        }
    }

    /// Top-left of the stored coordinates, recursing into groups.
    pub fn min_corner(&self) -> Option<Point> {
        self.bounds().map(|(x, y, _, _)| Point::new(x, y))
    }
}

/// Extent of the box spanned by two corners.
pub(crate) fn corner_bounds(a: Point, b: Point) -> Bounds {
    (a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

/// Extent of a point list, `None` when empty.
pub(crate) fn point_bounds(points: &[Point]) -> Option<Bounds> {
    points.iter().fold(None, |acc, p| {
        Some(match acc {
            None => (p.x, p.y, p.x, p.y),
            Some((x1, y1, x2, y2)) => (x1.min(p.x), y1.min(p.y), x2.max(p.x), y2.max(p.y)),
        })
    })
}

/// Smallest extent covering both, treating `None` as empty.
pub(crate) fn union_bounds(a: Option<Bounds>, b: Option<Bounds>) -> Option<Bounds> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some((ax1, ay1, ax2, ay2)), Some((bx1, by1, bx2, by2))) => {
            Some((ax1.min(bx1), ay1.min(by1), ax2.max(bx2), ay2.max(by2)))
        }
    }
}
