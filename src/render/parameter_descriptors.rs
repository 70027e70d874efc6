//! Supported ranges for the user-adjustable frame parameters.
//!
//! The renderer itself accepts any value. Callers keep inputs inside these
//! ranges, and sliders map a handle position onto them.

use std::fmt;
use tracing::warn;

/// Descriptor for a floating-point parameter with bounded range.
#[derive(Clone, Debug)]
pub struct FloatParamDescriptor {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub description: &'static str,
}

impl fmt::Display for FloatParamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) in [{}, {}]", self.name, self.description.to_lowercase(), self.min, self.max)
    }
}

impl FloatParamDescriptor {
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp into range, warning when the value had to move.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            warn!("{}: got NaN, using {}", self, self.min);
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            warn!("{}: {} clamped to {}", self, value, clamped);
        }
        clamped
    }

    /// Slider position in [0, 1] to a parameter value.
    pub fn from_fraction(&self, fraction: f32) -> f32 {
        self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Parameter value to slider position in [0, 1].
    pub fn to_fraction(&self, value: f32) -> f32 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

pub const K1: FloatParamDescriptor = FloatParamDescriptor {
    name: "k1",
    min: 30.0,
    max: 800.0,
    description: "Horizontal projection scale",
};

pub const K2: FloatParamDescriptor = FloatParamDescriptor {
    name: "k2",
    min: 30.0,
    max: 800.0,
    description: "Vertical projection scale",
};

pub const DISTANCE: FloatParamDescriptor = FloatParamDescriptor {
    name: "distance",
    min: -1.0,
    max: 500.0,
    description: "Camera distance from the torus",
};

pub const HUE: FloatParamDescriptor = FloatParamDescriptor {
    name: "hue",
    min: 0.0,
    max: 360.0,
    description: "Torus hue in degrees",
};

pub const SPEED: FloatParamDescriptor = FloatParamDescriptor {
    name: "speed",
    min: 0.01,
    max: 3.0,
    description: "Rotation increment multiplier per frame",
};
