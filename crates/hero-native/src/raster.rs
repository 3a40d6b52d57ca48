//! Software [`Surface`] over an RGBA8 image buffer.
//!
//! Coverage is a one-pixel linear ramp at the shape edge, blended source-over
//! onto an opaque background. Good enough for snapshots; not a general rasteriser.

use glam::Vec2;
use hero_core::{Rgba, Size, Surface};
use image::{Rgba as Pixel, RgbaImage};

pub const BACKGROUND: [u8; 4] = [10, 14, 24, 255];

pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width.max(1), height.max(1), Pixel(BACKGROUND)),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let a = (color.alpha * coverage).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let dst = px.0[c] as f32;
            let src = color.rgb[c] as f32;
            px.0[c] = (src * a + dst * (1.0 - a)).round() as u8;
        }
    }

    /// Visit every pixel centre inside `[min, max]`, clipped to the image.
    fn for_each_in_box(
        &mut self,
        min: Vec2,
        max: Vec2,
        mut f: impl FnMut(&mut Self, i64, i64, Vec2),
    ) {
        let w = self.image.width() as i64;
        let h = self.image.height() as i64;
        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(w - 1);
        let y1 = (max.y.ceil() as i64).min(h - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                f(self, x, y, centre);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> Size {
        Size::new(self.image.width() as f32, self.image.height() as f32)
    }

    fn clear(&mut self) {
        for px in self.image.pixels_mut() {
            *px = Pixel(BACKGROUND);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if !(center.is_finite() && radius > 0.0) {
            return;
        }
        let reach = Vec2::splat(radius + 1.0);
        self.for_each_in_box(center - reach, center + reach, |s, x, y, p| {
            let coverage = (radius + 0.5 - p.distance(center)).clamp(0.0, 1.0);
            s.blend(x, y, color, coverage);
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        if !(from.is_finite() && to.is_finite() && width > 0.0) {
            return;
        }
        let half = width * 0.5;
        let reach = Vec2::splat(half + 1.0);
        let seg = to - from;
        let len_sq = seg.length_squared();
        self.for_each_in_box(from.min(to) - reach, from.max(to) + reach, |s, x, y, p| {
            let t = if len_sq > 0.0 {
                ((p - from).dot(seg) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let d = p.distance(from + seg * t);
            let coverage = (half + 0.5 - d).clamp(0.0, 1.0);
            s.blend(x, y, color, coverage);
        });
    }
}
