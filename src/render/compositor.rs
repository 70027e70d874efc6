//! Turn finished buffers into colored points on a display surface

use super::buffers::FrameBuffers;
use super::color::{ramp_palette, Rgb8};
use super::ramp::BACKGROUND;
use image::{Rgb, RgbImage};
use rayon::prelude::*;

/// Anything that can receive single colored points.
pub trait Canvas {
    fn draw_point(&mut self, x: u32, y: u32, color: Rgb8);
}

/// Points outside the image are dropped, so a smaller image shows a crop.
impl Canvas for RgbImage {
    #[inline]
    fn draw_point(&mut self, x: u32, y: u32, color: Rgb8) {
        if let Some(px) = self.get_pixel_mut_checked(x, y) {
            *px = Rgb(color);
        }
    }
}

/// A recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawPoint {
    pub x: u32,
    pub y: u32,
    pub color: Rgb8,
}

/// Canvas that keeps the draw calls it receives, in order.
#[derive(Debug, Default)]
pub struct PointRecorder {
    pub points: Vec<DrawPoint>,
}

impl Canvas for PointRecorder {
    fn draw_point(&mut self, x: u32, y: u32, color: Rgb8) {
        self.points.push(DrawPoint { x, y, color });
    }
}

/// Emit one point per committed pixel, row-major. Background pixels are
/// left alone. Returns the number of points drawn.
pub fn composite<C: Canvas + ?Sized>(buffers: &FrameBuffers, hue: f32, canvas: &mut C) -> usize {
    let palette = ramp_palette(hue);
    let width = buffers.width();
    let mut drawn = 0;
    for (offset, &level) in buffers.brightness().iter().enumerate() {
        if level == BACKGROUND {
            continue;
        }
        let x = (offset % width) as u32;
        let y = (offset / width) as u32;
        canvas.draw_point(x, y, palette[level as usize]);
        drawn += 1;
    }
    drawn
}

/// Composite straight into a fresh black image, one row per rayon task.
pub fn composite_image(buffers: &FrameBuffers, hue: f32) -> RgbImage {
    let resolution = buffers.resolution();
    let width = buffers.width();
    let palette = ramp_palette(hue);
    let mut image = RgbImage::new(resolution.width, resolution.height);

    image
        .par_chunks_mut(width * 3)
        .zip(buffers.brightness().par_chunks(width))
        .for_each(|(row_px, row_levels)| {
            for (px, &level) in row_px.chunks_exact_mut(3).zip(row_levels) {
                if level != BACKGROUND {
                    px.copy_from_slice(&palette[level as usize]);
                }
            }
        });

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::Resolution;

    fn buffers_with(points: &[(usize, usize, u8)]) -> FrameBuffers {
        let mut buffers = FrameBuffers::new(Resolution::new(10, 4));
        {
            let mut full = buffers.full_band();
            for &(x, y, level) in points {
                full.depth_test(x, y, 1.0, level);
            }
        }
        buffers
    }

    #[test]
    fn test_background_draws_nothing() {
        let buffers = buffers_with(&[]);
        let mut recorder = PointRecorder::default();
        assert_eq!(composite(&buffers, 120.0, &mut recorder), 0);
        assert!(recorder.points.is_empty());
    }

    #[test]
    fn test_one_point_per_committed_pixel() {
        let buffers = buffers_with(&[(3, 1, 11), (7, 2, 0), (1, 3, 5)]);
        let mut recorder = PointRecorder::default();
        assert_eq!(composite(&buffers, 0.0, &mut recorder), 3);
        assert_eq!(
            recorder.points,
            vec![
                DrawPoint { x: 3, y: 1, color: [255, 0, 0] },
                DrawPoint { x: 7, y: 2, color: [21, 0, 0] },
                DrawPoint { x: 1, y: 3, color: [127, 0, 0] },
            ]
        );
    }

    #[test]
    fn test_hue_selects_channel() {
        let buffers = buffers_with(&[(2, 2, 11)]);
        let mut recorder = PointRecorder::default();
        composite(&buffers, 240.0, &mut recorder);
        assert_eq!(recorder.points[0].color, [0, 0, 255]);
    }

    #[test]
    fn test_parallel_image_matches_draw_calls() {
        let buffers = buffers_with(&[(0, 0, 4), (9, 3, 9), (5, 1, 2), (6, 1, 3)]);
        let image = composite_image(&buffers, 300.0);

        let mut drawn = RgbImage::new(10, 4);
        composite(&buffers, 300.0, &mut drawn);
        assert_eq!(image.as_raw(), drawn.as_raw());
        assert_eq!(image.get_pixel(4, 2).0, [0, 0, 0], "background stays black");
    }
}
