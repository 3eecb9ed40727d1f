use sketchpad_core::{InputEvent, Modifiers, Point};
use sketchpad_designer::{
    DesignRectangle, DesignerShape, DesignerState, DrawCall, DrawingTool, EditorMode, Gesture,
    RecordingSurface, Shape, ShapeType,
};
use sketchpad_settings::{Config, ModifierKey};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn rect(x: f64, y: f64) -> Shape {
    Shape::Rectangle(DesignRectangle::new(
        p(x, y),
        p(x + 10.0, y + 10.0),
        Some("black".to_string()),
    ))
}

fn corners(state: &DesignerState, id: u64) -> (Point, Point) {
    match &state.scene.get(id).expect("shape exists").shape {
        Shape::Rectangle(r) => (r.start_point, r.end_point),
        other => panic!("expected rectangle, got {:?}", other),
    }
}

fn run(state: &mut DesignerState, surface: &mut RecordingSurface, events: &[InputEvent]) {
    for event in events {
        state.handle_event(event, surface);
    }
}

fn with_modifiers(event: InputEvent, modifiers: Modifiers) -> InputEvent {
    match event {
        InputEvent::PrimaryDown { x, y, .. } => InputEvent::PrimaryDown { x, y, modifiers },
        InputEvent::PrimaryDrag { x, y, .. } => InputEvent::PrimaryDrag { x, y, modifiers },
        InputEvent::PrimaryUp { x, y, .. } => InputEvent::PrimaryUp { x, y, modifiers },
        other => other,
    }
}

fn shift_click(x: f64, y: f64) -> [InputEvent; 2] {
    [
        with_modifiers(InputEvent::primary_down(x, y), Modifiers::SHIFT),
        with_modifiers(InputEvent::primary_up(x, y), Modifiers::SHIFT),
    ]
}

#[test]
fn test_click_with_jitter_selects_without_moving() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let id = state.scene.insert(rect(0.0, 0.0));

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(5.0, 5.0),
            InputEvent::primary_drag(7.0, 6.0),
            InputEvent::primary_up(7.0, 6.0),
        ],
    );

    assert_eq!(state.selection.single(), Some(id));
    assert_eq!(corners(&state, id), (p(0.0, 0.0), p(10.0, 10.0)));
    assert!(!state.can_undo());
    assert_eq!(state.gesture(), Gesture::Idle);
}

#[test]
fn test_drag_translates_by_net_delta() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let id = state.scene.insert(rect(0.0, 0.0));

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(5.0, 5.0),
            InputEvent::primary_drag(15.0, 5.0),
            InputEvent::primary_drag(25.0, 5.0),
            InputEvent::primary_up(25.0, 5.0),
        ],
    );

    assert_eq!(corners(&state, id), (p(20.0, 0.0), p(30.0, 10.0)));
    assert_eq!(state.selection.single(), Some(id));
    assert!(!state.is_dragging());

    // The whole drag is one undo step.
    state.undo();
    assert_eq!(corners(&state, id), (p(0.0, 0.0), p(10.0, 10.0)));
}

#[test]
fn test_release_far_away_counts_as_drag() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let id = state.scene.insert(rect(0.0, 0.0));

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(5.0, 5.0),
            InputEvent::primary_up(5.0, 25.0),
        ],
    );

    assert_eq!(corners(&state, id), (p(0.0, 20.0), p(10.0, 30.0)));
}

#[test]
fn test_threshold_is_exclusive() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let id = state.scene.insert(rect(0.0, 0.0));

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(5.0, 5.0),
            InputEvent::primary_drag(10.0, 10.0),
        ],
    );
    assert!(!state.is_dragging());

    state.handle_event(&InputEvent::primary_drag(10.5, 5.0), &mut surface);
    assert!(state.is_dragging());
    assert_eq!(corners(&state, id), (p(5.5, 0.0), p(15.5, 10.0)));
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let id = state.scene.insert(rect(0.0, 0.0));
    state.selection.select_only(id);

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(100.0, 100.0),
            InputEvent::primary_up(100.0, 100.0),
        ],
    );
    assert!(state.selection.is_empty());
}

#[test]
fn test_modifier_click_toggles() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let a = state.scene.insert(rect(0.0, 0.0));
    let b = state.scene.insert(rect(50.0, 0.0));

    run(
        &mut state,
        &mut surface,
        &[InputEvent::primary_down(5.0, 5.0), InputEvent::primary_up(5.0, 5.0)],
    );
    run(&mut state, &mut surface, &shift_click(55.0, 5.0));
    assert!(state.selection.is_selected(a));
    assert!(state.selection.is_selected(b));

    run(&mut state, &mut surface, &shift_click(5.0, 5.0));
    assert!(!state.selection.is_selected(a));
    assert!(state.selection.is_selected(b));

    // Modifier click on empty space leaves the selection alone.
    run(&mut state, &mut surface, &shift_click(200.0, 200.0));
    assert_eq!(state.selection.single(), Some(b));
}

#[test]
fn test_dragging_a_selected_shape_moves_whole_selection() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let a = state.scene.insert(rect(0.0, 0.0));
    let b = state.scene.insert(rect(50.0, 0.0));
    state.select_all();

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(5.0, 5.0),
            InputEvent::primary_drag(5.0, 25.0),
            InputEvent::primary_up(5.0, 25.0),
        ],
    );

    assert_eq!(corners(&state, a).0, p(0.0, 20.0));
    assert_eq!(corners(&state, b).0, p(50.0, 20.0));
    assert_eq!(state.selection.len(), 2);
}

#[test]
fn test_dragging_an_unselected_shape_collapses_selection() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let a = state.scene.insert(rect(0.0, 0.0));
    let b = state.scene.insert(rect(50.0, 0.0));
    state.selection.select_only(a);

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(55.0, 5.0),
            InputEvent::primary_drag(55.0, 25.0),
            InputEvent::primary_up(55.0, 25.0),
        ],
    );

    assert_eq!(corners(&state, a).0, p(0.0, 0.0));
    assert_eq!(corners(&state, b).0, p(50.0, 20.0));
    assert_eq!(state.selection.single(), Some(b));
}

#[test]
fn test_modifier_drag_adds_and_moves_all() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let a = state.scene.insert(rect(0.0, 0.0));
    let b = state.scene.insert(rect(50.0, 0.0));
    state.selection.select_only(a);

    run(
        &mut state,
        &mut surface,
        &[
            with_modifiers(InputEvent::primary_down(55.0, 5.0), Modifiers::SHIFT),
            with_modifiers(InputEvent::primary_drag(65.0, 5.0), Modifiers::SHIFT),
            with_modifiers(InputEvent::primary_up(65.0, 5.0), Modifiers::SHIFT),
        ],
    );

    assert_eq!(corners(&state, a).0, p(10.0, 0.0));
    assert_eq!(corners(&state, b).0, p(60.0, 0.0));
    assert_eq!(state.selection.len(), 2);
}

#[test]
fn test_configured_multi_select_modifier() {
    let mut config = Config::default();
    config.interaction.multi_select_modifier = ModifierKey::Control;
    let mut state = DesignerState::with_config(&config);
    let mut surface = RecordingSurface::new();
    let a = state.scene.insert(rect(0.0, 0.0));
    let b = state.scene.insert(rect(50.0, 0.0));
    state.selection.select_only(a);

    // Shift is no longer the multi-select key.
    run(&mut state, &mut surface, &shift_click(55.0, 5.0));
    assert_eq!(state.selection.single(), Some(b));

    run(
        &mut state,
        &mut surface,
        &[
            with_modifiers(InputEvent::primary_down(5.0, 5.0), Modifiers::CONTROL),
            with_modifiers(InputEvent::primary_up(5.0, 5.0), Modifiers::CONTROL),
        ],
    );
    assert_eq!(state.selection.len(), 2);
}

#[test]
fn test_configured_drag_threshold() {
    let mut config = Config::default();
    config.interaction.drag_threshold = 20.0;
    let mut state = DesignerState::with_config(&config);
    let mut surface = RecordingSurface::new();
    let id = state.scene.insert(rect(0.0, 0.0));

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(5.0, 5.0),
            InputEvent::primary_drag(15.0, 5.0),
            InputEvent::primary_up(15.0, 5.0),
        ],
    );
    assert_eq!(corners(&state, id).0, p(0.0, 0.0));
    assert_eq!(state.selection.single(), Some(id));
}

#[test]
fn test_rubber_band_rectangle() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    state.set_mode(EditorMode::Drawing(DrawingTool::Rectangle));
    state.set_color("blue");

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(10.0, 10.0),
            InputEvent::primary_drag(30.0, 20.0),
        ],
    );
    let id = state.scene.ids()[0];
    assert_eq!(corners(&state, id), (p(10.0, 10.0), p(30.0, 20.0)));
    assert_eq!(state.in_progress(), Some(ShapeType::Rectangle));

    state.handle_event(&InputEvent::primary_up(40.0, 30.0), &mut surface);
    assert_eq!(corners(&state, id), (p(10.0, 10.0), p(40.0, 30.0)));
    assert_eq!(state.scene.get(id).map(|o| o.shape.color()), Some(Some("blue")));
    assert_eq!(state.in_progress(), None);

    state.undo();
    assert!(state.scene.is_empty());
}

#[test]
fn test_square_is_equalized_by_redraw() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    state.set_mode(EditorMode::Drawing(DrawingTool::Square));

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(0.0, 0.0),
            InputEvent::primary_drag(30.0, 10.0),
            InputEvent::primary_up(30.0, 10.0),
        ],
    );

    match &state.scene.iter().next().expect("square").shape {
        Shape::Square(square) => assert_eq!(square.end_point, p(10.0, 10.0)),
        other => panic!("expected square, got {:?}", other),
    };
}

#[test]
fn test_freehand_stroke() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    state.set_mode(EditorMode::Drawing(DrawingTool::Freehand));

    run(
        &mut state,
        &mut surface,
        &[
            InputEvent::primary_down(0.0, 0.0),
            InputEvent::primary_drag(1.0, 1.0),
            InputEvent::primary_drag(2.0, 2.0),
        ],
    );
    assert_eq!(state.in_progress(), Some(ShapeType::Freehand));
    assert_eq!(state.in_progress_points().len(), 3);
    assert!(state.scene.is_empty());

    state.handle_event(&InputEvent::primary_up(3.0, 3.0), &mut surface);
    assert_eq!(state.in_progress(), None);
    match &state.scene.iter().next().expect("stroke").shape {
        Shape::Freehand(stroke) => assert_eq!(stroke.points.len(), 4),
        other => panic!("expected freehand, got {:?}", other),
    }
    assert!(state.can_undo());
}

#[test]
fn test_redraw_styles_selection() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    let a = state.scene.insert(rect(0.0, 0.0));
    state.scene.insert(rect(50.0, 0.0));
    state.selection.select_only(a);
    state.redraw(&mut surface);

    let frame = surface.frame();
    assert_eq!(frame.len(), 2);
    match &frame[0] {
        DrawCall::Rectangle { outline, style, .. } => {
            assert_eq!(outline.as_deref(), Some("red"));
            assert_eq!(style.dash, Some([5, 2]));
        }
        other => panic!("unexpected call {:?}", other),
    }
    match &frame[1] {
        DrawCall::Rectangle { outline, style, .. } => {
            assert_eq!(outline.as_deref(), Some("black"));
            assert_eq!(style.dash, None);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn test_events_trigger_redraw_only_when_needed() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    state.redraw(&mut surface);
    assert_eq!(surface.redraw_count(), 1);

    // Idle pointer motion changes nothing visible.
    state.handle_event(&InputEvent::PointerMove { x: 3.0, y: 3.0 }, &mut surface);
    assert_eq!(surface.redraw_count(), 1);
    assert_eq!(state.pointer(), Some(p(3.0, 3.0)));

    state.scene.insert(rect(0.0, 0.0));
    state.handle_event(&InputEvent::primary_down(5.0, 5.0), &mut surface);
    state.handle_event(&InputEvent::primary_up(5.0, 5.0), &mut surface);
    assert_eq!(surface.redraw_count(), 2);
    assert!(!state.needs_redraw());
}

#[test]
fn test_grouped_shape_is_hit_through_members() {
    let mut state = DesignerState::new();
    let mut surface = RecordingSurface::new();
    state.scene.insert(rect(0.0, 0.0));
    state.scene.insert(rect(50.0, 0.0));
    state.select_all();
    state.group_selected();
    let group = state.selection.single().expect("group selected");
    state.selection.deselect_all();

    run(
        &mut state,
        &mut surface,
        &[InputEvent::primary_down(55.0, 5.0), InputEvent::primary_up(55.0, 5.0)],
    );
    assert_eq!(state.selection.single(), Some(group));
}
