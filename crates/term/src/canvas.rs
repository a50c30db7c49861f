//! PixelCanvas: an RGB pixel grid the frame renderer draws onto.
//!
//! Shapes are rasterized immediately with straight-alpha blending. Text cannot
//! be rasterized at two pixels per cell, so it is kept as a small list of labels
//! and laid over the composed terminal cells by [`crate::present`].

use arrayvec::{ArrayString, ArrayVec};

use crate::engine::Surface;
use crate::types::{Rgb, Rgba};

/// Labels kept per frame; further text calls are dropped.
pub const MAX_LABELS: usize = 16;
/// Characters kept per label; longer text is truncated.
pub const LABEL_CAPACITY: usize = 32;

/// Text to be drawn over the composed frame, in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub text: ArrayString<LABEL_CAPACITY>,
    pub color: Rgba,
}

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
    labels: ArrayVec<Label, MAX_LABELS>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width as usize * height as usize],
            labels: ArrayVec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize(width as usize * height as usize, Rgb::default());
    }

    /// Fill every pixel and drop all labels.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.labels.clear();
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline(always)]
    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = blend(self.pixels[i], color);
        }
    }
}

impl Surface for PixelCanvas {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.plot(px, py, color);
            }
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba) {
        if radius < 0 {
            return;
        }
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.plot(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        // Bresenham, all octants.
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn text(&mut self, x: i32, y: i32, text: &str, color: Rgba) {
        let mut label = Label {
            x,
            y,
            text: ArrayString::new(),
            color,
        };
        for ch in text.chars() {
            if label.text.try_push(ch).is_err() {
                break;
            }
        }
        let _ = self.labels.try_push(label);
    }

    /// One terminal column per character.
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32
    }
}

/// Straight-alpha "over" blend.
pub fn blend(dst: Rgb, src: Rgba) -> Rgb {
    match src.a {
        255 => src.rgb(),
        0 => dst,
        a => {
            let a = a as u16;
            let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a) + 127) / 255) as u8;
            Rgb::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut c = PixelCanvas::new(4, 4);
        c.fill_rect(-2, -2, 4, 4, RED);
        assert_eq!(c.pixel(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(c.pixel(1, 1), Some(Rgb::new(255, 0, 0)));
        assert_eq!(c.pixel(2, 2), Some(Rgb::default()));
    }

    #[test]
    fn test_blend_respects_alpha() {
        let dst = Rgb::new(0, 0, 0);
        assert_eq!(blend(dst, Rgba::new(255, 255, 255, 0)), dst);
        assert_eq!(blend(dst, Rgba::new(200, 100, 50, 255)), Rgb::new(200, 100, 50));
        assert_eq!(blend(dst, Rgba::new(255, 255, 255, 128)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_line_reaches_both_endpoints() {
        let mut c = PixelCanvas::new(10, 10);
        c.line(8, 1, 1, 6, RED);
        assert_eq!(c.pixel(8, 1), Some(Rgb::new(255, 0, 0)));
        assert_eq!(c.pixel(1, 6), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_circle_radius_zero_is_one_pixel() {
        let mut c = PixelCanvas::new(3, 3);
        c.fill_circle(1, 1, 0, RED);
        let lit = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .filter(|&(x, y)| c.pixel(x, y) == Some(Rgb::new(255, 0, 0)))
            .count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn test_labels_truncate_and_cap() {
        let mut c = PixelCanvas::new(8, 8);
        let long = "x".repeat(LABEL_CAPACITY + 10);
        c.text(0, 0, &long, RED);
        assert_eq!(c.labels()[0].text.len(), LABEL_CAPACITY);

        for _ in 0..MAX_LABELS + 4 {
            c.text(0, 0, "hi", RED);
        }
        assert_eq!(c.labels().len(), MAX_LABELS);

        c.clear(Rgb::default());
        assert!(c.labels().is_empty());
    }
}
