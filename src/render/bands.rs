//! Row bands: the unit of work for the parallel rasterizer.
//!
//! Every worker owns exactly one band and only ever writes rows inside it.
//! A partition is checked once when it is built, so a gap or overlap is
//! caught before any frame is drawn.

use super::error::{RenderError, Result};

/// Half-open row range `[start_y, end_y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub start_y: usize,
    pub end_y: usize,
}

impl Band {
    #[inline]
    pub fn contains(&self, y: usize) -> bool {
        y >= self.start_y && y < self.end_y
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.end_y - self.start_y
    }
}

/// Contiguous, disjoint bands tiling `0..height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandPartition {
    bands: Vec<Band>,
    height: usize,
}

impl BandPartition {
    /// Split `height` rows into `workers` bands. When `workers` does not divide
    /// `height`, the first `height % workers` bands take one extra row.
    pub fn new(height: usize, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(RenderError::InvalidPartition("worker count must be at least 1".into()));
        }
        if workers > height {
            return Err(RenderError::InvalidPartition(format!(
                "{workers} workers cannot share {height} rows"
            )));
        }

        let rows_per_band = height / workers;
        let remainder = height % workers;

        let mut bands = Vec::with_capacity(workers);
        let mut start_y = 0;
        for i in 0..workers {
            let rows = rows_per_band + usize::from(i < remainder);
            bands.push(Band { start_y, end_y: start_y + rows });
            start_y += rows;
        }

        Self::from_bands(bands, height)
    }

    /// Accept an explicit band list after checking it tiles `0..height`.
    pub fn from_bands(bands: Vec<Band>, height: usize) -> Result<Self> {
        validate_tiling(&bands, height)?;
        Ok(Self { bands, height })
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

fn validate_tiling(bands: &[Band], height: usize) -> Result<()> {
    if bands.is_empty() {
        return Err(RenderError::InvalidPartition("no bands".into()));
    }

    let mut expected_start = 0;
    for (i, band) in bands.iter().enumerate() {
        if band.start_y != expected_start {
            let kind = if band.start_y > expected_start { "gap" } else { "overlap" };
            return Err(RenderError::InvalidPartition(format!(
                "{kind} before band {i}: starts at row {}, previous ended at {expected_start}",
                band.start_y
            )));
        }
        if band.end_y <= band.start_y {
            return Err(RenderError::InvalidPartition(format!(
                "band {i} is empty ({}..{})",
                band.start_y, band.end_y
            )));
        }
        expected_start = band.end_y;
    }

    if expected_start != height {
        return Err(RenderError::InvalidPartition(format!(
            "bands end at row {expected_start}, canvas has {height} rows"
        )));
    }
    Ok(())
}
