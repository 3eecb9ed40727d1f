use sketchpad_core::Point;
use sketchpad_designer::{
    load_shapes, load_shapes_from_reader, save_shapes, DesignCircle, DesignEllipse,
    DesignFreehand, DesignGroup, DesignLine, DesignPolygon, DesignRectangle, DesignSquare,
    DesignerError, DesignerShape, Shape, ShapeRecord, ShapeRegistry, ShapeType,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn color(name: &str) -> Option<String> {
    Some(name.to_string())
}

fn sample_scene() -> Vec<Shape> {
    let mut stroke = DesignFreehand::new(color("green"));
    for point in [p(1.0, 1.0), p(2.0, 3.0), p(4.0, 2.0)] {
        stroke.add_point(point);
    }
    let mut polygon = DesignPolygon::new(color("blue"));
    for point in [p(0.0, 0.0), p(10.0, 0.0), p(5.0, 8.0)] {
        polygon.add_point(point);
    }
    polygon.close();
    let mut open = DesignPolygon::new(color("blue"));
    open.add_point(p(0.0, 0.0));
    open.add_point(p(3.0, 3.0));

    let inner = DesignGroup::new(vec![
        Shape::Circle(DesignCircle::new(p(0.0, 0.0), p(8.0, 8.0), color("red"))),
        Shape::Line(DesignLine::new(p(1.0, 1.0), p(2.0, 2.0), color("red"))),
    ]);
    let outer = DesignGroup::new(vec![
        Shape::Group(inner),
        Shape::Ellipse(DesignEllipse::new(p(5.0, 5.0), p(25.0, 15.0), color("black"))),
    ]);

    vec![
        Shape::Freehand(stroke),
        Shape::Polygon(polygon),
        Shape::Polygon(open),
        Shape::Line(DesignLine::new(p(0.0, 0.0), p(10.0, 5.0), color("black"))),
        Shape::Rectangle(DesignRectangle::new(p(30.0, 30.0), p(10.0, 20.0), color("black"))),
        Shape::Square(DesignSquare::new(p(0.0, 0.0), p(10.0, 10.0), color("black"))),
        Shape::Ellipse(DesignEllipse::new(p(0.0, 0.0), p(20.0, 10.0), color("purple"))),
        Shape::Circle(DesignCircle::new(p(0.0, 0.0), p(20.0, 20.0), color("orange"))),
        Shape::Group(outer),
    ]
}

#[test]
fn test_round_trip_every_variant() {
    let shapes = sample_scene();
    let text = save_shapes(&shapes).expect("save");
    let loaded = load_shapes(&text).expect("load");
    assert_eq!(loaded, shapes);

    // Saving the loaded scene again is stable.
    assert_eq!(save_shapes(&loaded).expect("save again"), text);
}

#[test]
fn test_fractional_coordinates_are_exact() {
    let drift = 0.1 + 0.2;
    let mut stroke = DesignFreehand::new(color("black"));
    stroke.add_point(p(180.17933438838418, -733.0829450236107));
    stroke.add_point(p(drift, 1.0 / 3.0));
    let mut line = DesignLine::new(p(12.5, 7.25), p(99.99999999999999, 1e-300), None);
    line.translate(0.7, -0.3);
    let shapes = vec![Shape::Freehand(stroke), Shape::Line(line)];

    let loaded = load_shapes(&save_shapes(&shapes).expect("save")).expect("load");
    assert_eq!(loaded, shapes);
    match &loaded[0] {
        Shape::Freehand(f) => {
            assert_eq!(f.points[0].x.to_bits(), 180.17933438838418f64.to_bits());
            assert_eq!(f.points[1].x.to_bits(), drift.to_bits());
        }
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn test_reader_matches_str() {
    let shapes = sample_scene();
    let text = save_shapes(&shapes).expect("save");
    let loaded = load_shapes_from_reader(text.as_bytes()).expect("load");
    assert_eq!(loaded, shapes);
}

#[test]
fn test_record_layout() {
    let shapes = sample_scene();
    let text = save_shapes(&shapes).expect("save");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    let records = value.as_array().expect("array");

    let types: Vec<_> = records.iter().map(|r| r["type"].as_str().unwrap_or("")).collect();
    assert_eq!(
        types,
        vec![
            "Freehand",
            "Polygon",
            "Polygon",
            "Line",
            "Rectangle",
            "Square",
            "Ellipse",
            "Circle",
            "Group"
        ]
    );

    assert_eq!(records[3]["color"], "black");
    assert_eq!(records[3]["start_point"], serde_json::json!([0.0, 0.0]));
    assert_eq!(records[3]["end_point"], serde_json::json!([10.0, 5.0]));
    assert!(records[3].get("points").is_none());

    assert_eq!(records[1]["closed"], true);
    assert_eq!(records[1]["points"].as_array().map(|a| a.len()), Some(4));
    assert_eq!(records[2]["closed"], false);

    let group = &records[8];
    assert!(group["color"].is_null());
    assert_eq!(group["shapes"][0]["type"], "Group");
    assert_eq!(group["shapes"][0]["shapes"][0]["type"], "Circle");
}

#[test]
fn test_shape_type_discriminators() {
    for shape_type in ShapeType::ALL {
        assert!(ShapeRegistry::global().is_registered(shape_type.as_str()));
    }
    let shapes = sample_scene();
    for shape in &shapes {
        assert_eq!(shape.to_record().shape_type, shape.shape_type().as_str());
    }
}

#[test]
fn test_unknown_type_fails() {
    let err = load_shapes(r#"[{"type": "Star", "color": "black", "points": []}]"#).unwrap_err();
    match err {
        DesignerError::UnknownShapeType { shape_type } => assert_eq!(shape_type, "Star"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unknown_type_inside_group_fails() {
    let input = r#"[
        {"type": "Line", "color": "black", "start_point": [0, 0], "end_point": [1, 1]},
        {"type": "Group", "color": null, "shapes": [{"type": "Star", "color": "red"}]}
    ]"#;
    assert!(matches!(
        load_shapes(input),
        Err(DesignerError::UnknownShapeType { .. })
    ));
}

#[test]
fn test_missing_field_names_the_variant() {
    let err = load_shapes(r#"[{"type": "Line", "color": "black", "start_point": [0, 0]}]"#)
        .unwrap_err();
    match err {
        DesignerError::MalformedRecord { shape_type, reason } => {
            assert_eq!(shape_type, "Line");
            assert!(reason.contains("end_point"));
        }
        other => panic!("unexpected error {:?}", other),
    }

    let err = load_shapes(r#"[{"type": "Group", "color": null}]"#).unwrap_err();
    assert!(matches!(
        err,
        DesignerError::MalformedRecord { ref shape_type, .. } if shape_type == "Group"
    ));

    let err = load_shapes(r#"[{"type": "Freehand", "color": "black"}]"#).unwrap_err();
    assert!(matches!(
        err,
        DesignerError::MalformedRecord { ref shape_type, .. } if shape_type == "Freehand"
    ));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(load_shapes("[{"), Err(DesignerError::Json(_))));
    assert!(matches!(load_shapes(""), Err(DesignerError::Json(_))));
}

#[test]
fn test_wrong_structure_is_malformed() {
    assert!(matches!(
        load_shapes(r#"{"type": "Line"}"#),
        Err(DesignerError::MalformedRecord { .. })
    ));
    assert!(matches!(
        load_shapes(r#"[{"color": "black"}]"#),
        Err(DesignerError::MalformedRecord { .. })
    ));
    assert!(matches!(
        load_shapes(r#"[{"type": "Line", "start_point": [0], "end_point": [1, 1]}]"#),
        Err(DesignerError::MalformedRecord { .. })
    ));
}

#[test]
fn test_empty_scene() {
    assert!(load_shapes("[]").expect("load").is_empty());
    let empty: Vec<Shape> = Vec::new();
    assert_eq!(save_shapes(&empty).expect("save"), "[]");
}

#[test]
fn test_lenient_fields() {
    // Integer coordinates, no color, no closed flag.
    let input = r#"[
        {"type": "Rectangle", "start_point": [1, 2], "end_point": [3, 4]},
        {"type": "Polygon", "color": "blue", "points": [[0, 0], [4, 0], [4, 4], [0, 0]]},
        {"type": "Polygon", "color": "blue", "points": [[0, 0], [4, 0]]}
    ]"#;
    let shapes = load_shapes(input).expect("load");

    match &shapes[0] {
        Shape::Rectangle(r) => {
            assert_eq!(r.start_point, p(1.0, 2.0));
            assert_eq!(r.color, None);
        }
        other => panic!("unexpected shape {:?}", other),
    }
    assert!(matches!(&shapes[1], Shape::Polygon(poly) if poly.closed));
    assert!(matches!(&shapes[2], Shape::Polygon(poly) if !poly.closed));
}

#[test]
fn test_square_end_point_kept_as_stored() {
    let input = r#"[{"type": "Square", "color": "black", "start_point": [0, 0], "end_point": [30, 10]}]"#;
    let shapes = load_shapes(input).expect("load");
    match &shapes[0] {
        Shape::Square(s) => assert_eq!(s.end_point, p(30.0, 10.0)),
        other => panic!("unexpected shape {:?}", other),
    }
    let saved = save_shapes(&shapes).expect("save");
    let record: Vec<ShapeRecord> = serde_json::from_str(&saved).expect("records");
    assert_eq!(record[0].end_point, Some([30.0, 10.0]));
}

#[test]
fn test_custom_registry() {
    let mut registry = ShapeRegistry::new();
    registry.register("Line", |r, _| DesignLine::from_record(r).map(Shape::Line));

    let line = ShapeRecord::bounded(ShapeType::Line, color("black"), p(0.0, 0.0), p(1.0, 1.0));
    assert!(matches!(registry.build(&line), Ok(Shape::Line(_))));

    let rect = ShapeRecord::bounded(ShapeType::Rectangle, None, p(0.0, 0.0), p(1.0, 1.0));
    assert!(matches!(
        registry.build(&rect),
        Err(DesignerError::UnknownShapeType { .. })
    ));
}
