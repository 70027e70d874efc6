//! Torus sampling and perspective projection
//!
//! The torus is swept by two parametric angles: phi around the tube and theta
//! around the ring. Each (phi, theta) pair is rotated by A and B, pushed back by
//! the camera distance, and projected onto the canvas together with a
//! reciprocal depth key and a lighting weight.

use super::constants::{BRIGHTNESS_SCALE, LOOKUP_SIZE, PHI_STRIDE, RING_OFFSET, THETA_STRIDE};
use super::trig::{TrigTable, TRIG_LUT};
use super::types::{FrameParams, Resolution};

/// A pair of indices into the trig table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AngleSample {
    pub phi_i: usize,
    pub theta_i: usize,
}

/// Enumerate the fixed sample grid, phi-major.
pub fn angle_samples() -> impl Iterator<Item = AngleSample> {
    (0..LOOKUP_SIZE).step_by(PHI_STRIDE).flat_map(|phi_i| {
        (0..LOOKUP_SIZE)
            .step_by(THETA_STRIDE)
            .map(move |theta_i| AngleSample { phi_i, theta_i })
    })
}

/// Number of samples produced by [`angle_samples`].
pub const fn sample_count() -> usize {
    LOOKUP_SIZE.div_ceil(PHI_STRIDE) * LOOKUP_SIZE.div_ceil(THETA_STRIDE)
}

/// One projected surface point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSample {
    pub x: i32,
    pub y: i32,
    /// Reciprocal view depth ("mess"); larger is nearer.
    pub depth: f32,
    /// Truncated lighting weight; may be negative.
    pub weight: i32,
}

impl ScreenSample {
    /// Strictly inside the canvas. Row 0 and column 0 are never written.
    #[inline]
    pub fn in_bounds(&self, resolution: Resolution) -> bool {
        self.x > 0
            && self.y > 0
            && (self.x as i64) < resolution.width as i64
            && (self.y as i64) < resolution.height as i64
    }
}

/// Per-frame projection state: rotation trig and scale factors resolved once.
pub struct Projector {
    trig: &'static TrigTable,
    sin_a: f32,
    cos_a: f32,
    sin_b: f32,
    cos_b: f32,
    k1: f32,
    k2: f32,
    distance: f32,
    half_width: f32,
    half_height: f32,
}

impl Projector {
    pub fn new(params: &FrameParams, resolution: Resolution) -> Self {
        Self {
            trig: &TRIG_LUT,
            sin_a: params.a.sin(),
            cos_a: params.a.cos(),
            sin_b: params.b.sin(),
            cos_b: params.b.cos(),
            k1: params.k1,
            k2: params.k2,
            distance: params.distance,
            // integer halves, as the canvas center is a pixel
            half_width: (resolution.width / 2) as f32,
            half_height: (resolution.height / 2) as f32,
        }
    }

    /// Both scales are zero: every sample would land on the center pixel.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.k1 == 0.0 && self.k2 == 0.0
    }

    #[inline]
    pub fn project(&self, sample: AngleSample) -> ScreenSample {
        let (sin_a, cos_a, sin_b, cos_b) = (self.sin_a, self.cos_a, self.sin_b, self.cos_b);
        let cos_phi = self.trig.cos(sample.phi_i);
        let sin_phi = self.trig.sin(sample.phi_i);
        let sin_theta = self.trig.sin(sample.theta_i);
        let cos_theta = self.trig.cos(sample.theta_i);

        let cos_phi2 = cos_phi + RING_OFFSET;
        let depth = 1.0 / (sin_theta * cos_phi2 * sin_a + sin_phi * cos_a + self.distance);
        let t = sin_theta * cos_phi2 * cos_a - sin_phi * sin_a;

        let x = self.half_width + self.k1 * depth * (cos_theta * cos_phi2 * cos_b - t * sin_b);
        let y = self.half_height + self.k2 * depth * (cos_theta * cos_phi2 * sin_b + t * cos_b);

        let light = (sin_phi * sin_a - sin_theta * cos_phi * cos_a) * cos_b
            - sin_theta * cos_phi * sin_a
            - sin_phi * cos_a
            - cos_theta * cos_phi * sin_b;

        ScreenSample {
            x: x as i32,
            y: y as i32,
            depth,
            weight: (BRIGHTNESS_SCALE * light) as i32,
        }
    }
}
