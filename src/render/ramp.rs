//! Twelve-level brightness ramp

/// Ramp glyphs, darkest to brightest.
pub const BRIGHTNESS_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

pub const RAMP_LEVELS: usize = BRIGHTNESS_RAMP.len();

/// Brightness-buffer value for pixels no sample reached.
pub const BACKGROUND: u8 = u8::MAX;

/// Map a lighting weight to a ramp level. Surfaces facing away from the light
/// get the darkest visible level, never background.
#[inline]
pub fn level_for_weight(weight: i32) -> u8 {
    weight.clamp(0, RAMP_LEVELS as i32 - 1) as u8
}

/// Ramp level scaled into 0..=255.
#[inline]
pub fn level_brightness(level: u8) -> u32 {
    (level as u32 + 1) * 255 / RAMP_LEVELS as u32
}

/// Glyph for a buffer cell; background is a space.
#[inline]
pub fn level_glyph(level: u8) -> char {
    BRIGHTNESS_RAMP.get(level as usize).copied().unwrap_or(' ')
}
