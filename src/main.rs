//! torus-render CLI
//!
//! - `frame`: render one frame to PNG
//! - `animate`: render a rotating sequence of numbered PNGs

use clap::Parser;
use std::process::ExitCode;
use torus_render::app::{self, AnimationJob, FrameJob};
use torus_render::config::{Cli, Commands};
use torus_render::error::Result;
use torus_render::render::FrameParams;
use torus_render::render_log::RenderRecord;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn run(command: &Commands) -> Result<RenderRecord> {
    match command {
        Commands::Frame(args) => {
            let state = args.shape.to_state();
            let job = FrameJob {
                output: args.output.clone(),
                params: FrameParams { a: args.a, b: args.b, ..state.frame_params() },
                workers: args.shape.workers,
                ascii: args.ascii,
            };
            app::render_test_frame(&job)
        }
        Commands::Animate(args) => {
            let job = AnimationJob {
                output_dir: args.output_dir.clone(),
                frames: args.frames,
                workers: args.shape.workers,
                state: args.to_state(),
            };
            app::render_animation(&job)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli.command) {
        Ok(record) => {
            app::log_run(&cli.log_file, &record);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
