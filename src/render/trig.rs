//! Sine/cosine lookup table shared by every projection.
//!
//! The table is built once per process and never written again, so workers
//! read it concurrently without synchronization.

use super::constants::LOOKUP_SIZE;
use once_cell::sync::Lazy;

/// Process-wide table, built on first access.
pub static TRIG_LUT: Lazy<TrigTable> = Lazy::new(TrigTable::build);

/// Parallel sine and cosine tables indexed in hundredths of a radian.
pub struct TrigTable {
    sin: [f32; LOOKUP_SIZE],
    cos: [f32; LOOKUP_SIZE],
}

impl TrigTable {
    fn build() -> Self {
        let mut sin = [0.0; LOOKUP_SIZE];
        let mut cos = [0.0; LOOKUP_SIZE];
        #[allow(clippy::needless_range_loop)] // index doubles as the angle
        for i in 0..LOOKUP_SIZE {
            let angle = i as f32 / 100.0;
            sin[i] = angle.sin();
            cos[i] = angle.cos();
        }
        Self { sin, cos }
    }

    #[inline]
    pub fn sin(&self, i: usize) -> f32 {
        self.sin[i]
    }

    #[inline]
    pub fn cos(&self, i: usize) -> f32 {
        self.cos[i]
    }
}

/// Force the table to be built. Call once at startup so the first frame
/// doesn't pay for it.
pub fn init_lookup_tables() -> &'static TrigTable {
    Lazy::force(&TRIG_LUT)
}
