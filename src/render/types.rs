//! Plain data types shared across the rendering pipeline

use super::constants::{DEFAULT_DISTANCE, DEFAULT_HUE, DEFAULT_K1, DEFAULT_K2, HEIGHT, WIDTH};
use serde::{Deserialize, Serialize};

/// Output canvas dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

/// The six scalars that fully determine one frame.
///
/// The renderer does not validate or clamp these; keeping them inside the
/// supported ranges is the caller's job (see `parameter_descriptors`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameParams {
    /// Rotation about the X axis, radians.
    pub a: f32,
    /// Rotation about the Z axis, radians.
    pub b: f32,
    /// Horizontal projection scale.
    pub k1: f32,
    /// Vertical projection scale.
    pub k2: f32,
    /// Camera distance added to the view-space depth term.
    pub distance: f32,
    /// Hue in degrees.
    pub hue: f32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            k1: DEFAULT_K1,
            k2: DEFAULT_K2,
            distance: DEFAULT_DISTANCE,
            hue: DEFAULT_HUE,
        }
    }
}

/// Counters gathered while rendering one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Samples projected, summed over all workers.
    pub samples: usize,
    /// Depth-test wins written to the buffers.
    pub committed: usize,
    /// Samples skipped because their depth key was infinite or NaN, summed
    /// over all workers like `samples`.
    pub non_finite: usize,
    /// Pixels handed to the canvas by the compositor.
    pub points_drawn: usize,
    /// Both projection scales were zero; nothing was rasterized.
    pub degenerate: bool,
}

impl FrameStats {
    pub(crate) fn merge(&mut self, other: &FrameStats) {
        self.samples += other.samples;
        self.committed += other.committed;
        self.non_finite += other.non_finite;
        self.points_drawn += other.points_drawn;
        self.degenerate |= other.degenerate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let res = Resolution::default();
        assert_eq!((res.width, res.height), (1000, 800));
        assert_eq!(res.pixel_count(), 800_000);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = FrameStats::default();
        total.merge(&FrameStats { samples: 10, committed: 3, non_finite: 1, ..Default::default() });
        total.merge(&FrameStats { samples: 5, committed: 2, degenerate: true, ..Default::default() });
        assert_eq!(total.samples, 15);
        assert_eq!(total.committed, 5);
        assert_eq!(total.non_finite, 1);
        assert!(total.degenerate);
    }
}
