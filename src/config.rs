//! Command-line configuration

use crate::animation::AnimationState;
use crate::render::constants::{
    DEFAULT_DISTANCE, DEFAULT_HUE, DEFAULT_K1, DEFAULT_K2, DEFAULT_SPEED, DEFAULT_WORKERS,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "torus-render")]
#[command(about = "Render a rotating shaded torus with a parallel depth-buffered rasterizer", long_about = None)]
pub struct Cli {
    /// Log per-frame statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run log file
    #[arg(long, global = true, default_value = "render_log.json")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single frame to PNG
    Frame(FrameArgs),
    /// Render a rotating sequence of frames to numbered PNGs
    Animate(AnimateArgs),
}

/// Shape and color parameters shared by both subcommands.
///
/// Out-of-range values are clamped with a warning.
#[derive(Args, Debug, Clone)]
pub struct ShapeArgs {
    /// Horizontal projection scale [30, 800]
    #[arg(long, default_value_t = DEFAULT_K1)]
    pub k1: f32,

    /// Vertical projection scale [30, 800]
    #[arg(long, default_value_t = DEFAULT_K2)]
    pub k2: f32,

    /// Camera distance [-1, 500]
    #[arg(long, default_value_t = DEFAULT_DISTANCE, allow_hyphen_values = true)]
    pub distance: f32,

    /// Hue in degrees [0, 360)
    #[arg(long, default_value_t = DEFAULT_HUE)]
    pub hue: f32,

    /// Worker threads (one horizontal band each)
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,
}

impl ShapeArgs {
    /// Starting animation state with every value clamped into range.
    pub fn to_state(&self) -> AnimationState {
        let mut state = AnimationState::default();
        state.set_k1(self.k1);
        state.set_k2(self.k2);
        state.set_distance(self.distance);
        state.set_hue(self.hue);
        state
    }
}

#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Output PNG path
    #[arg(short, long, default_value = "pics/torus.png")]
    pub output: String,

    /// Rotation about the X axis, radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub a: f32,

    /// Rotation about the Z axis, radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub b: f32,

    /// Also print the brightness ramp as text
    #[arg(long)]
    pub ascii: bool,

    #[command(flatten)]
    pub shape: ShapeArgs,
}

#[derive(Args, Debug)]
pub struct AnimateArgs {
    /// Directory for numbered frames
    #[arg(short, long, default_value = "frames")]
    pub output_dir: String,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value_t = 120)]
    pub frames: usize,

    /// Rotation increment multiplier [0.01, 3.0]
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f32,

    /// Cycle the hue every frame
    #[arg(long)]
    pub rainbow: bool,

    #[command(flatten)]
    pub shape: ShapeArgs,
}

impl AnimateArgs {
    pub fn to_state(&self) -> AnimationState {
        let mut state = self.shape.to_state();
        state.set_speed(self.speed);
        state.set_rainbow(self.rainbow);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_defaults() {
        let cli = Cli::try_parse_from(["torus-render", "frame"]).unwrap();
        let Commands::Frame(args) = cli.command else {
            panic!("expected frame subcommand");
        };
        assert_eq!(args.output, "pics/torus.png");
        assert_eq!(args.shape.workers, 4);
        let params = args.shape.to_state().frame_params();
        assert_eq!((params.k1, params.k2, params.distance, params.hue), (200.0, 200.0, 5.0, 300.0));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_negative_values_parse() {
        let cli = Cli::try_parse_from(["torus-render", "frame", "--a", "-1.5", "--distance", "-0.5"]).unwrap();
        let Commands::Frame(args) = cli.command else {
            panic!("expected frame subcommand");
        };
        assert_eq!(args.a, -1.5);
        assert_eq!(args.shape.distance, -0.5);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let cli = Cli::try_parse_from([
            "torus-render", "animate", "--k1", "5", "--k2", "9000", "--speed", "50", "--rainbow",
        ])
        .unwrap();
        let Commands::Animate(args) = cli.command else {
            panic!("expected animate subcommand");
        };
        let state = args.to_state();
        assert_eq!(state.k1(), 30.0);
        assert_eq!(state.k2(), 800.0);
        assert_eq!(state.speed(), 3.0);
        assert!(state.rainbow());
        assert_eq!(args.frames, 120);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["torus-render", "animate", "-n", "3", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_file, PathBuf::from("render_log.json"));
    }
}
