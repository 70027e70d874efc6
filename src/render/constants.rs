//! Fixed constants for the torus rasterizer and its animation driver

// ==================== CANVAS ====================

/// Default canvas width in pixels.
pub const WIDTH: u32 = 1000;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 800;

/// Number of horizontal bands (and worker threads) per frame.
pub const DEFAULT_WORKERS: usize = 4;

// ==================== SAMPLING ====================

/// One full turn (2π) in steps of 0.01 radians.
pub const LOOKUP_SIZE: usize = 628;

/// Step between tube-angle samples. Tuned by eye, not derived.
pub const PHI_STRIDE: usize = 7;

/// Step between ring-angle samples. Tuned by eye, not derived.
pub const THETA_STRIDE: usize = 2;

/// Scales the lighting dot product into ramp-index range.
pub const BRIGHTNESS_SCALE: f32 = 12.0;

/// Offset added to the tube cosine: tube radius 1 at distance 2 from the axis.
pub const RING_OFFSET: f32 = 2.0;

// ==================== ANIMATION DEFAULTS ====================

pub const DEFAULT_K1: f32 = 200.0;
pub const DEFAULT_K2: f32 = 200.0;
pub const DEFAULT_DISTANCE: f32 = 5.0;
pub const DEFAULT_HUE: f32 = 300.0;
pub const DEFAULT_SPEED: f32 = 0.18;

/// Per-tick rotation of A, multiplied by speed.
pub const ROTATION_STEP_A: f32 = 0.05;
/// Per-tick rotation of B, multiplied by speed.
pub const ROTATION_STEP_B: f32 = 0.03;

/// Hue advance per tick in rainbow mode.
pub const RAINBOW_HUE_STEP: f32 = 0.4;

/// Distance change per mouse-wheel notch.
pub const ZOOM_STEP: f32 = 0.4;

/// Radians of rotation per pixel of drag.
pub const DRAG_SENSITIVITY: f32 = 0.01;
