//! # SketchPad Core
//!
//! Core types shared by the SketchPad crates.
//! Provides the geometry kernel used by shape hit-testing and the input
//! event vocabulary the editor controller consumes.

pub mod event;
pub mod geometry;

pub use event::{EditorKey, InputEvent, Modifiers};
pub use geometry::{
    euclidean_distance, min_corner, point_in_axis_aligned_box, point_in_ellipse,
    point_in_polygon_ray_cast, point_near_segment, point_on_polygon_boundary,
    point_to_segment_distance, point_within_radius, Point,
};
