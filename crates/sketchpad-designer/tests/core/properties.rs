use proptest::prelude::*;
use sketchpad_core::Point;
use sketchpad_designer::{
    load_shapes, save_shapes, DesignCircle, DesignEllipse, DesignFreehand, DesignGroup,
    DesignLine, DesignPolygon, DesignRectangle, DesignSquare, DesignerShape, DesignerState,
    Scene, Shape,
};

fn coord() -> impl Strategy<Value = f64> {
    (-50i32..50).prop_map(f64::from)
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (point(), point()).prop_map(|(a, b)| Shape::Rectangle(DesignRectangle::new(a, b, None))),
        (point(), point()).prop_map(|(a, b)| Shape::Ellipse(DesignEllipse::new(a, b, None))),
        (point(), point()).prop_map(|(a, b)| Shape::Line(DesignLine::new(a, b, None))),
        prop::collection::vec(point(), 1..6).prop_map(|points| {
            let mut stroke = DesignFreehand::new(None);
            for p in points {
                stroke.add_point(p);
            }
            Shape::Freehand(stroke)
        }),
        prop::collection::vec(point(), 3..6).prop_map(|points| {
            let mut polygon = DesignPolygon::new(None);
            for p in points {
                polygon.add_point(p);
            }
            polygon.close();
            Shape::Polygon(polygon)
        }),
    ]
}

fn any_coord() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

fn any_point() -> impl Strategy<Value = Point> {
    (any_coord(), any_coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn any_color() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{1,8}")
}

fn any_leaf() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (any_point(), any_point(), any_color())
            .prop_map(|(a, b, c)| Shape::Line(DesignLine::new(a, b, c))),
        (any_point(), any_point(), any_color())
            .prop_map(|(a, b, c)| Shape::Rectangle(DesignRectangle::new(a, b, c))),
        (any_point(), any_point(), any_color())
            .prop_map(|(a, b, c)| Shape::Square(DesignSquare::new(a, b, c))),
        (any_point(), any_point(), any_color())
            .prop_map(|(a, b, c)| Shape::Ellipse(DesignEllipse::new(a, b, c))),
        (any_point(), any_point(), any_color())
            .prop_map(|(a, b, c)| Shape::Circle(DesignCircle::new(a, b, c))),
        (prop::collection::vec(any_point(), 1..6), any_color()).prop_map(|(points, c)| {
            let mut stroke = DesignFreehand::new(c);
            for p in points {
                stroke.add_point(p);
            }
            Shape::Freehand(stroke)
        }),
        (prop::collection::vec(any_point(), 2..6), any_color(), any::<bool>()).prop_map(
            |(points, c, close)| {
                let mut polygon = DesignPolygon::new(c);
                for p in points {
                    polygon.add_point(p);
                }
                if close {
                    polygon.close();
                }
                Shape::Polygon(polygon)
            }
        ),
    ]
}

fn any_shape() -> impl Strategy<Value = Shape> {
    any_leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(|members| Shape::Group(DesignGroup::new(members)))
    })
}

proptest! {
    #[test]
    fn save_then_load_is_exact(shapes in prop::collection::vec(any_shape(), 0..6)) {
        let text = save_shapes(&shapes).expect("save");
        let loaded = load_shapes(&text).expect("load");
        prop_assert_eq!(&loaded, &shapes);
        prop_assert_eq!(save_shapes(&loaded).expect("save again"), text);
    }

    #[test]
    fn translation_preserves_containment(
        shape in shape(),
        at in point(),
        dx in coord(),
        dy in coord(),
    ) {
        let mut moved = shape.clone();
        moved.translate(dx, dy);
        let shifted = Point::new(at.x + dx, at.y + dy);
        prop_assert_eq!(shape.contains_point(at), moved.contains_point(shifted));
    }

    #[test]
    fn expand_inverts_replace(shapes in prop::collection::vec(shape(), 2..6)) {
        let mut scene = Scene::new();
        let ids: Vec<u64> = shapes.iter().cloned().map(|s| scene.insert(s)).collect();
        let before: Vec<Shape> = scene.shapes().cloned().collect();

        let group = scene.replace(&ids).expect("grouped");
        prop_assert_eq!(scene.len(), 1);
        scene.expand(group).expect("expanded");

        let after: Vec<Shape> = scene.shapes().cloned().collect();
        prop_assert_eq!(after, before);
    }

    #[test]
    fn undo_then_redo_is_identity(shapes in prop::collection::vec(shape(), 2..5)) {
        let mut state = DesignerState::new();
        for s in shapes {
            state.scene.insert(s);
        }
        state.select_all();
        let before = state.scene.snapshot();

        state.group_selected();
        let after = state.scene.snapshot();

        state.undo();
        prop_assert_eq!(state.scene.snapshot(), before);
        state.redo();
        prop_assert_eq!(state.scene.snapshot(), after);
    }
}
