//! Color space conversions

use super::ramp::{level_brightness, RAMP_LEVELS};

/// 8-bit RGB triple.
pub type Rgb8 = [u8; 3];

/// Full circle in degrees
const HUE_FULL_CIRCLE: f32 = 360.0;
/// Width of one hue sector in degrees
const HUE_SECTOR: f32 = 60.0;

/// Convert hue/saturation/value to 8-bit RGB.
///
/// `h` is wrapped into [0, 360); `s` and `v` are clamped to [0, 1]. Any input,
/// including NaN or infinities, yields some color rather than a panic.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb8 {
    let mut h = h % HUE_FULL_CIRCLE;
    if h < 0.0 {
        h += HUE_FULL_CIRCLE;
    }
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    if s == 0.0 {
        let gray = to_channel(v);
        return [gray, gray, gray];
    }

    let sector = h / HUE_SECTOR;
    let i = sector.floor();
    let frac = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * frac);
    let t = v * (1.0 - s * (1.0 - frac));

    let (r, g, b) = match i as i64 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [to_channel(r), to_channel(g), to_channel(b)]
}

#[inline]
fn to_channel(x: f32) -> u8 {
    // `as` saturates and sends NaN to 0
    (x * 255.0).round() as u8
}

/// One color per ramp level for a fixed hue, full saturation.
pub fn ramp_palette(hue: f32) -> [Rgb8; RAMP_LEVELS] {
    let mut palette = [[0; 3]; RAMP_LEVELS];
    for (level, color) in palette.iter_mut().enumerate() {
        let value = level_brightness(level as u8) as f32 / 255.0;
        *color = hsv_to_rgb(hue, 1.0, value);
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), [0, 0, 255]);
    }

    #[test]
    fn test_secondary_hues() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), [255, 255, 0]);
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), [0, 255, 255]);
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), [255, 0, 255]);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        for hue in [0.0, 45.0, 200.0, 359.0] {
            assert_eq!(hsv_to_rgb(hue, 0.0, 0.5), [128, 128, 128]);
        }
        assert_eq!(hsv_to_rgb(10.0, 0.0, 1.0), [255, 255, 255]);
        assert_eq!(hsv_to_rgb(10.0, -3.0, 0.0), [0, 0, 0]);
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(840.0, 1.0, 1.0), hsv_to_rgb(120.0, 1.0, 1.0));
    }

    #[test]
    fn test_saturation_and_value_clamped() {
        assert_eq!(hsv_to_rgb(0.0, 5.0, 9.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(0.0, 1.0, -1.0), [0, 0, 0]);
    }

    #[test]
    fn test_half_sector_interpolates() {
        // 30° sits halfway between red and yellow
        assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), [255, 128, 0]);
    }

    #[test]
    fn test_non_finite_inputs_do_not_panic() {
        let _ = hsv_to_rgb(f32::NAN, 1.0, 1.0);
        let _ = hsv_to_rgb(f32::INFINITY, 1.0, 1.0);
        let _ = hsv_to_rgb(0.0, f32::NAN, f32::NAN);
        let _ = hsv_to_rgb(f32::NEG_INFINITY, 0.5, f32::INFINITY);
    }

    #[test]
    fn test_ramp_palette_monotonic_value() {
        let palette = ramp_palette(0.0);
        assert_eq!(palette[11], [255, 0, 0]);
        assert!(palette.windows(2).all(|w| w[0][0] < w[1][0]));
        assert!(palette.iter().all(|c| c[1] == 0 && c[2] == 0));
    }
}
