use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use sketchpad::designer::load_shapes;
use sketchpad::{
    describe_shape, init_logging, load_events, replay, Config, DesignerState, DrawingTool,
    EditorMode, TraceSurface,
};

/// Headless SketchPad: replay input against scene files
#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON list of input events
    Replay {
        /// Event script to replay
        #[arg(value_name = "EVENTS")]
        events: PathBuf,

        /// Scene file to start from
        #[arg(long, value_name = "FILE")]
        scene: Option<PathBuf>,

        /// Where to save the resulting scene
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Configuration file (JSON or TOML)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Drawing tool active when the replay starts
        #[arg(long, value_enum)]
        tool: Option<ToolArg>,

        /// Color for newly drawn shapes
        #[arg(long)]
        color: Option<String>,
    },
    /// Print a summary of every shape in a scene file
    Info {
        #[arg(value_name = "FILE")]
        scene: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ToolArg {
    Freehand,
    Polygon,
    Line,
    Rectangle,
    Square,
    Ellipse,
    Circle,
}

impl From<ToolArg> for DrawingTool {
    fn from(tool: ToolArg) -> Self {
        match tool {
            ToolArg::Freehand => DrawingTool::Freehand,
            ToolArg::Polygon => DrawingTool::Polygon,
            ToolArg::Line => DrawingTool::Line,
            ToolArg::Rectangle => DrawingTool::Rectangle,
            ToolArg::Square => DrawingTool::Square,
            ToolArg::Ellipse => DrawingTool::Ellipse,
            ToolArg::Circle => DrawingTool::Circle,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    match args.command {
        Command::Replay {
            events,
            scene,
            output,
            config,
            tool,
            color,
        } => {
            let config = load_config(config.as_deref())?;
            let mut state = DesignerState::with_config(&config);
            if let Some(scene) = &scene {
                state.load_from_file(scene)?;
            }
            if let Some(tool) = tool {
                state.set_mode(EditorMode::Drawing(tool.into()));
            }
            if let Some(color) = color {
                state.set_color(color);
            }

            let events = load_events(&events)?;
            let mut surface = TraceSurface::new();
            replay(&mut state, &events, &mut surface);
            info!(
                frames = surface.frames(),
                primitives = surface.primitives(),
                "trace surface"
            );

            match output {
                Some(path) => state.save_to_file(&path)?,
                None => println!("{}", state.save_to_string()?),
            }
        }
        Command::Info { scene } => {
            let text = std::fs::read_to_string(&scene)
                .with_context(|| format!("Failed to read scene file {}", scene.display()))?;
            let shapes = load_shapes(&text)
                .with_context(|| format!("Failed to load scene file {}", scene.display()))?;
            println!("{}: {} shape(s)", scene.display(), shapes.len());
            for (index, shape) in shapes.iter().enumerate() {
                println!("{:>4}  {}", index, describe_shape(shape));
            }
        }
    }

    Ok(())
}

/// Explicit path must load; otherwise the platform config file is used when
/// present and defaults when not.
fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    match Config::default_path() {
        Ok(default) => Config::load_or_default(&default)
            .with_context(|| format!("Failed to load config {}", default.display())),
        Err(e) => {
            warn!("No config directory ({}); using defaults", e);
            Ok(Config::default())
        }
    }
}
