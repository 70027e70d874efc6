//! Application orchestration and workflow management
//!
//! Headless drivers for the renderer: one function per subcommand, plus the
//! small helpers they share (output directories, frame naming, run logging).

use crate::animation::AnimationState;
use crate::error::{ConfigError, Result};
use crate::render::{save_image_as_png, FrameParams, FrameStats, RenderConfig, Renderer, Resolution};
use crate::render_log::{RenderLogger, RenderRecord};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Ramp sampling step for the text preview: one glyph per 10x20 pixels
/// keeps a 1000x800 frame within a 100-column terminal.
const PREVIEW_STEP_X: usize = 10;
const PREVIEW_STEP_Y: usize = 20;

/// Settings for a single-frame render
#[derive(Clone, Debug)]
pub struct FrameJob {
    pub output: String,
    pub params: FrameParams,
    pub workers: usize,
    pub ascii: bool,
}

/// Settings for an animation sequence
#[derive(Clone, Debug)]
pub struct AnimationJob {
    pub output_dir: String,
    pub frames: usize,
    pub workers: usize,
    pub state: AnimationState,
}

/// Create `dir` (and parents) if it doesn't exist yet
pub fn setup_directories(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| ConfigError::FileSystem {
        operation: "create directory".to_string(),
        path: dir.display().to_string(),
        error: e,
    })?;
    Ok(())
}

/// Numbered PNG path for frame `index` inside `dir`
pub fn generate_filename(dir: &str, index: usize) -> String {
    Path::new(dir).join(format!("frame_{index:04}.png")).to_string_lossy().to_string()
}

fn build_renderer(workers: usize) -> Result<Renderer> {
    let config = RenderConfig { resolution: Resolution::default(), workers };
    Ok(Renderer::new(config)?)
}

/// Render one frame to a PNG, optionally printing the brightness ramp
pub fn render_test_frame(job: &FrameJob) -> Result<RenderRecord> {
    let started = Instant::now();
    if let Some(parent) = Path::new(&job.output).parent() {
        setup_directories(parent)?;
    }

    let mut renderer = build_renderer(job.workers)?;
    info!(
        "Rendering frame a={:.3} b={:.3} k1={} k2={} distance={} hue={}",
        job.params.a, job.params.b, job.params.k1, job.params.k2, job.params.distance, job.params.hue
    );
    let (image, stats) = renderer.render_image(&job.params)?;
    save_image_as_png(&image, &job.output)?;

    if job.ascii {
        println!("{}", renderer.buffers().ascii_preview(PREVIEW_STEP_X, PREVIEW_STEP_Y));
    }
    info!("✓ Frame complete: {} pixels drawn", stats.points_drawn);

    let mut record = RenderRecord::new("frame", job.output.clone());
    record.workers = job.workers;
    record.start_params = job.params;
    record.frames = 1;
    record.total_committed = stats.committed;
    record.elapsed_ms = started.elapsed().as_millis() as u64;
    Ok(record)
}

/// Render `job.frames` consecutive animation ticks to numbered PNGs
pub fn render_animation(job: &AnimationJob) -> Result<RenderRecord> {
    if job.frames == 0 {
        return Err(ConfigError::NoFrames.into());
    }
    let started = Instant::now();
    setup_directories(Path::new(&job.output_dir))?;

    let mut renderer = build_renderer(job.workers)?;
    let mut state = job.state.clone();
    let start_params = state.frame_params();
    let mut totals = FrameStats::default();

    info!("Rendering {} frames into {}/", job.frames, job.output_dir);
    for index in 0..job.frames {
        let params = state.step();
        let (image, stats) = renderer.render_image(&params)?;
        save_image_as_png(&image, &generate_filename(&job.output_dir, index))?;
        if stats.points_drawn == 0 {
            warn!("frame {} is empty", index);
        }
        debug!("frame {}: {} pixels drawn", index, stats.points_drawn);
        totals.merge(&stats);
    }
    info!("✓ {} frames complete: {} depth-test wins", job.frames, totals.committed);

    let mut record = RenderRecord::new("animate", job.output_dir.clone());
    record.workers = job.workers;
    record.start_params = start_params;
    record.speed = state.speed();
    record.rainbow = state.rainbow();
    record.frames = job.frames;
    record.total_committed = totals.committed;
    record.elapsed_ms = started.elapsed().as_millis() as u64;
    Ok(record)
}

/// Append a run to the log for reproducibility. A log that can't be
/// written only costs the record; the rendered output is already on disk.
pub fn log_run(log_file: &Path, record: &RenderRecord) {
    match RenderLogger::new(log_file).append(record) {
        Ok(count) => info!("Run logged to {} ({} runs recorded)", log_file.display(), count),
        Err(e) => warn!("Could not update run log {}: {}", log_file.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::render::error::RenderError;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("torus_app_{tag}_{ts}"))
    }

    #[test]
    fn test_generate_filename_zero_padded() {
        let name = generate_filename("frames", 7);
        assert_eq!(Path::new(&name), Path::new("frames").join("frame_0007.png"));
        assert!(generate_filename("out", 12345).ends_with("frame_12345.png"));
    }

    #[test]
    fn test_setup_directories_nested() {
        let dir = temp_dir("setup").join("a").join("b");
        setup_directories(&dir).unwrap();
        assert!(dir.is_dir());
        setup_directories(&dir).unwrap();
        setup_directories(Path::new("")).unwrap();
        let _ = fs::remove_dir_all(dir.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_render_test_frame_writes_png() {
        let dir = temp_dir("frame");
        let output = dir.join("torus.png").to_string_lossy().to_string();
        let job = FrameJob {
            output: output.clone(),
            params: FrameParams { a: 1.0, b: 0.5, ..FrameParams::default() },
            workers: 4,
            ascii: false,
        };

        let record = render_test_frame(&job).unwrap();
        assert_eq!(record.command, "frame");
        assert_eq!(record.frames, 1);
        assert!(record.total_committed > 0);

        let loaded = image::open(&output).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (1000, 800));
        assert!(loaded.pixels().any(|p| p.0 != [0, 0, 0]));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_render_animation_numbers_frames() {
        let dir = temp_dir("anim");
        let mut state = AnimationState::default();
        state.set_speed(3.0);
        let job = AnimationJob {
            output_dir: dir.to_string_lossy().to_string(),
            frames: 3,
            workers: 2,
            state,
        };

        let record = render_animation(&job).unwrap();
        assert_eq!(record.command, "animate");
        assert_eq!(record.frames, 3);
        assert_eq!(record.speed, 3.0);
        assert_eq!((record.start_params.a, record.start_params.b), (0.0, 0.0));
        for i in 0..3 {
            assert!(Path::new(&generate_filename(&job.output_dir, i)).is_file());
        }
        assert!(!Path::new(&generate_filename(&job.output_dir, 3)).exists());

        // consecutive ticks rotate, so the frames differ
        let first = image::open(generate_filename(&job.output_dir, 0)).unwrap().to_rgb8();
        let last = image::open(generate_filename(&job.output_dir, 2)).unwrap().to_rgb8();
        assert_ne!(first.as_raw(), last.as_raw());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_render_animation_rejects_zero_frames() {
        let job = AnimationJob {
            output_dir: temp_dir("none").to_string_lossy().to_string(),
            frames: 0,
            workers: 4,
            state: AnimationState::default(),
        };
        assert!(matches!(render_animation(&job), Err(AppError::Config(ConfigError::NoFrames))));
        assert!(!Path::new(&job.output_dir).exists());
    }

    #[test]
    fn test_invalid_worker_count_surfaces_render_error() {
        let job = FrameJob {
            output: temp_dir("workers").join("x.png").to_string_lossy().to_string(),
            params: FrameParams::default(),
            workers: 0,
            ascii: false,
        };
        assert!(matches!(
            render_test_frame(&job),
            Err(AppError::Render(RenderError::InvalidPartition(_)))
        ));
        let _ = fs::remove_dir_all(Path::new(&job.output).parent().unwrap());
    }

    #[test]
    fn test_log_run_records_frame_results() {
        let dir = temp_dir("log");
        let output = dir.join("torus.png").to_string_lossy().to_string();
        let job = FrameJob {
            output,
            params: FrameParams { a: 2.0, b: 3.0, ..FrameParams::default() },
            workers: 4,
            ascii: false,
        };
        let record = render_test_frame(&job).unwrap();
        let log_file = dir.join("render_log.json");

        log_run(&log_file, &record);
        log_run(&log_file, &record);

        let records = RenderLogger::new(&log_file).load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].frames, 1);
        assert_eq!(records[0].total_committed, record.total_committed);
        assert_eq!(records[0].start_params, job.params);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_log_run_failure_is_not_fatal() {
        let dir = temp_dir("log_fail");
        setup_directories(&dir).unwrap();
        // the log path is a directory, so the append fails and is only reported
        log_run(&dir, &RenderRecord::new("frame", "x.png".to_string()));
        assert!(dir.is_dir());
        let _ = fs::remove_dir_all(&dir);
        let _ = fs::remove_file(format!("{}.lock", dir.display()));
    }
}
