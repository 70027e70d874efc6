//! Depth and brightness buffers: the per-frame accumulator.
//!
//! Both buffers are heap-backed, owned by the renderer, and reused across
//! frames. Workers never see the whole buffers; they get a [`BandSlice`] that
//! covers only their own rows.

use super::bands::{Band, BandPartition};
use super::error::{RenderError, Result};
use super::ramp::{level_glyph, BACKGROUND};
use super::types::Resolution;

pub struct FrameBuffers {
    resolution: Resolution,
    depth: Vec<f32>,
    brightness: Vec<u8>,
}

impl FrameBuffers {
    /// Allocate both buffers in their reset state.
    pub fn new(resolution: Resolution) -> Self {
        let pixels = resolution.pixel_count();
        Self {
            resolution,
            depth: vec![0.0; pixels],
            brightness: vec![BACKGROUND; pixels],
        }
    }

    /// Depth back to 0, brightness back to background.
    pub fn reset(&mut self) {
        self.depth.fill(0.0);
        self.brightness.fill(BACKGROUND);
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.resolution.width as usize
    }

    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    pub fn brightness(&self) -> &[u8] {
        &self.brightness
    }

    #[inline]
    pub fn depth_at(&self, x: usize, y: usize) -> f32 {
        self.depth[y * self.width() + x]
    }

    /// Ramp level at a pixel, or `None` for background.
    #[inline]
    pub fn level_at(&self, x: usize, y: usize) -> Option<u8> {
        let level = self.brightness[y * self.width() + x];
        (level != BACKGROUND).then_some(level)
    }

    /// Pixels that hold a committed sample.
    pub fn committed_pixels(&self) -> usize {
        self.brightness.iter().filter(|&&b| b != BACKGROUND).count()
    }

    /// The whole canvas as a single band.
    pub fn full_band(&mut self) -> BandSlice<'_> {
        let width = self.width();
        BandSlice {
            band: Band { start_y: 0, end_y: self.resolution.height as usize },
            width,
            depth: &mut self.depth,
            brightness: &mut self.brightness,
        }
    }

    /// Split both buffers into one disjoint mutable view per band.
    pub fn split_bands(&mut self, partition: &BandPartition) -> Result<Vec<BandSlice<'_>>> {
        let height = self.resolution.height as usize;
        if partition.height() != height {
            return Err(RenderError::InvalidPartition(format!(
                "partition covers {} rows, buffers have {height}",
                partition.height()
            )));
        }

        let width = self.width();
        let mut depth_rest = self.depth.as_mut_slice();
        let mut brightness_rest = self.brightness.as_mut_slice();
        let mut slices = Vec::with_capacity(partition.len());

        for &band in partition.bands() {
            let len = band.rows() * width;
            let (depth, depth_tail) = std::mem::take(&mut depth_rest).split_at_mut(len);
            let (brightness, brightness_tail) =
                std::mem::take(&mut brightness_rest).split_at_mut(len);
            depth_rest = depth_tail;
            brightness_rest = brightness_tail;
            slices.push(BandSlice { band, width, depth, brightness });
        }

        Ok(slices)
    }

    /// Render the brightness buffer as ramp glyphs, sampling every `step_x`
    /// columns and `step_y` rows.
    pub fn ascii_preview(&self, step_x: usize, step_y: usize) -> String {
        let (width, height) = (self.width(), self.resolution.height as usize);
        let (step_x, step_y) = (step_x.max(1), step_y.max(1));
        let mut out = String::with_capacity((width / step_x + 1) * (height / step_y + 1));
        for y in (0..height).step_by(step_y) {
            let row = &self.brightness[y * width..(y + 1) * width];
            out.extend(row.iter().step_by(step_x).map(|&level| level_glyph(level)));
            out.push('\n');
        }
        out
    }
}

/// Mutable view of the rows one worker owns.
pub struct BandSlice<'a> {
    band: Band,
    width: usize,
    depth: &'a mut [f32],
    brightness: &'a mut [u8],
}

impl BandSlice<'_> {
    #[inline]
    pub fn band(&self) -> Band {
        self.band
    }

    /// Write `depth` and `level` at absolute pixel (`x`, `y`) if `depth` is
    /// strictly nearer than what is stored. NaN never wins.
    #[inline]
    pub fn depth_test(&mut self, x: usize, y: usize, depth: f32, level: u8) -> bool {
        debug_assert!(self.band.contains(y), "row {y} outside band {:?}", self.band);
        let offset = (y - self.band.start_y) * self.width + x;
        if depth > self.depth[offset] {
            self.depth[offset] = depth;
            self.brightness[offset] = level;
            true
        } else {
            false
        }
    }
}
