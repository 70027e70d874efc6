//! Rendering module: torus projection, banded rasterization, color mapping, and output
//!
//! A [`Renderer`] owns the frame buffers and the band partition. Each call
//! resets the buffers, fans out one worker per band, joins them, and only
//! then hands the result to the compositor.

use tracing::{debug, info, warn};

// Module declarations
pub mod bands;
pub mod buffers;
pub mod color;
pub mod compositor;
pub mod constants;
pub mod error;
pub mod parameter_descriptors;
pub mod projection;
pub mod ramp;
pub mod rasterizer;
pub mod trig;
pub mod types;

use self::bands::BandPartition;
use self::buffers::FrameBuffers;
use self::error::{RenderError, Result};
use self::projection::Projector;

pub use color::hsv_to_rgb;
pub use compositor::{Canvas, DrawPoint, PointRecorder};
pub use trig::init_lookup_tables;
pub use types::{FrameParams, FrameStats, Resolution};

// Re-export types from dependencies used in public API
pub use image::RgbImage;

/// Rendering configuration parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub resolution: Resolution,
    pub workers: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            workers: constants::DEFAULT_WORKERS,
        }
    }
}

/// Reusable frame renderer.
pub struct Renderer {
    config: RenderConfig,
    partition: BandPartition,
    buffers: FrameBuffers,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        let partition = BandPartition::new(config.resolution.height as usize, config.workers)?;
        init_lookup_tables();
        info!(
            "Renderer ready: {}x{} canvas, {} bands",
            config.resolution.width,
            config.resolution.height,
            partition.len()
        );
        Ok(Self {
            config,
            partition,
            buffers: FrameBuffers::new(config.resolution),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn partition(&self) -> &BandPartition {
        &self.partition
    }

    /// Buffers from the most recent [`Renderer::rasterize`] call.
    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }

    /// Reset the buffers and rasterize one frame into them.
    pub fn rasterize(&mut self, params: &FrameParams) -> Result<FrameStats> {
        self.buffers.reset();
        let projector = Projector::new(params, self.config.resolution);
        let stats = rasterizer::rasterize_parallel(&projector, &mut self.buffers, &self.partition)?;

        if stats.degenerate {
            warn!("k1 and k2 are both zero; frame is empty");
        }
        if stats.non_finite > 0 {
            debug!("{} samples skipped with non-finite depth", stats.non_finite);
        }
        debug!(
            "rasterized a={:.3} b={:.3}: {} samples, {} depth-test wins",
            params.a, params.b, stats.samples, stats.committed
        );
        Ok(stats)
    }

    /// Rasterize one frame and draw it onto `canvas`.
    ///
    /// Points arrive in the renderer's resolution. An `RgbImage` canvas of a
    /// different size keeps only the points that fall inside it.
    pub fn render<C: Canvas + ?Sized>(&mut self, params: &FrameParams, canvas: &mut C) -> Result<FrameStats> {
        let mut stats = self.rasterize(params)?;
        stats.points_drawn = compositor::composite(&self.buffers, params.hue, canvas);
        Ok(stats)
    }

    /// Rasterize one frame into a new black-background image.
    pub fn render_image(&mut self, params: &FrameParams) -> Result<(RgbImage, FrameStats)> {
        let mut stats = self.rasterize(params)?;
        let image = compositor::composite_image(&self.buffers, params.hue);
        stats.points_drawn = self.buffers.committed_pixels();
        Ok((image, stats))
    }
}

/// Save an 8-bit RGB image as PNG
pub fn save_image_as_png(image: &RgbImage, path: &str) -> Result<()> {
    image.save(path).map_err(|e| RenderError::ImageEncoding(e.to_string()))?;
    info!("   Saved PNG => {path}");
    Ok(())
}
