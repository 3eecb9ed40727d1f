//! # SketchPad
//!
//! A 2D vector drawing editor core: draw, select, move, group, copy/paste
//! and persist geometric shapes.
//!
//! ## Architecture
//!
//! SketchPad is organized as a workspace with multiple crates:
//!
//! 1. **sketchpad-core** - Geometry kernel and input event types
//! 2. **sketchpad-designer** - Shape model, scene, editing controller, scene files
//! 3. **sketchpad-settings** - Editor configuration
//! 4. **sketchpad** - Headless host binary that replays input against a scene
//!
//! No windowing toolkit is bundled: a host supplies a
//! [`DrawingSurface`](sketchpad_designer::DrawingSurface) and feeds
//! [`InputEvent`](sketchpad_core::InputEvent)s to a
//! [`DesignerState`](sketchpad_designer::DesignerState).

pub mod headless;

pub use sketchpad_designer as designer;
pub use sketchpad_settings as settings;

pub use headless::{describe_shape, load_events, replay, TraceSurface};
pub use sketchpad_core::{EditorKey, InputEvent, Modifiers, Point};
pub use sketchpad_designer::{
    DesignerError, DesignerShape, DesignerState, DrawingSurface, DrawingTool, EditorMode,
    RecordingSurface, Shape, ShapeType,
};
pub use sketchpad_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
/// - INFO as the baseline level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
