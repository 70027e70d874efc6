//! Animation state: the caller side of the renderer.
//!
//! Holds the user-adjustable parameters, advances the rotation once per tick,
//! and keeps every value inside the supported ranges before it reaches the
//! renderer.

use crate::render::constants::{
    DEFAULT_DISTANCE, DEFAULT_HUE, DEFAULT_K1, DEFAULT_K2, DEFAULT_SPEED, DRAG_SENSITIVITY,
    RAINBOW_HUE_STEP, ROTATION_STEP_A, ROTATION_STEP_B, ZOOM_STEP,
};
use crate::render::parameter_descriptors::{DISTANCE, HUE, K1, K2, SPEED};
use crate::render::FrameParams;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub a: f32,
    pub b: f32,
    k1: f32,
    k2: f32,
    distance: f32,
    hue: f32,
    speed: f32,
    rainbow: bool,
    rainbow_hue: f32,
    dragging: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            k1: DEFAULT_K1,
            k2: DEFAULT_K2,
            distance: DEFAULT_DISTANCE,
            hue: DEFAULT_HUE,
            speed: DEFAULT_SPEED,
            rainbow: false,
            rainbow_hue: 0.0,
            dragging: false,
        }
    }
}

impl AnimationState {
    pub fn k1(&self) -> f32 {
        self.k1
    }

    pub fn k2(&self) -> f32 {
        self.k2
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn rainbow(&self) -> bool {
        self.rainbow
    }

    pub fn set_k1(&mut self, value: f32) {
        self.k1 = K1.clamp(value);
    }

    pub fn set_k2(&mut self, value: f32) {
        self.k2 = K2.clamp(value);
    }

    pub fn set_distance(&mut self, value: f32) {
        self.distance = DISTANCE.clamp(value);
    }

    pub fn set_hue(&mut self, value: f32) {
        self.hue = HUE.clamp(value);
    }

    pub fn set_speed(&mut self, value: f32) {
        self.speed = SPEED.clamp(value);
    }

    pub fn set_rainbow(&mut self, enabled: bool) {
        self.rainbow = enabled;
    }

    pub fn toggle_rainbow(&mut self) {
        self.rainbow = !self.rainbow;
    }

    /// Mouse-wheel zoom; positive notches move the camera away.
    pub fn zoom(&mut self, notches: f32) {
        self.distance = (self.distance + notches * ZOOM_STEP).clamp(DISTANCE.min, DISTANCE.max);
    }

    /// Start a drag. Auto-rotation pauses until [`AnimationState::end_drag`].
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Rotate by a pointer movement in pixels: vertical motion turns A,
    /// horizontal motion turns B.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.a += dy * DRAG_SENSITIVITY;
        self.b += dx * DRAG_SENSITIVITY;
    }

    /// Back to the startup view. The rainbow cycle position is kept.
    pub fn reset(&mut self) {
        *self = Self { rainbow_hue: self.rainbow_hue, ..Self::default() };
        debug!("animation state reset");
    }

    /// Parameters for the frame about to be drawn, without advancing.
    pub fn frame_params(&self) -> FrameParams {
        FrameParams {
            a: self.a,
            b: self.b,
            k1: self.k1,
            k2: self.k2,
            distance: self.distance,
            hue: self.hue,
        }
    }

    /// One animation tick: apply the rainbow hue, emit the frame parameters,
    /// then rotate unless a drag is in progress.
    pub fn step(&mut self) -> FrameParams {
        if self.rainbow {
            self.hue = self.rainbow_hue;
            self.rainbow_hue += RAINBOW_HUE_STEP;
            if self.rainbow_hue >= HUE.max {
                self.rainbow_hue = 0.0;
            }
        }

        let params = self.frame_params();

        if !self.dragging {
            self.a += ROTATION_STEP_A * self.speed;
            self.b += ROTATION_STEP_B * self.speed;
        }
        params
    }
}
