//! Drawing surface boundary.
//!
//! The renderer only ever pushes shapes; it never reads pixels back. Blending,
//! clipping and glyph rendering are the surface's business.

use crate::types::Rgba;

/// Something the frame renderer can draw onto.
///
/// Coordinates are integer pixels with the origin at the top-left corner.
/// Shapes may extend past the edges; implementations clip.
pub trait Surface {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba);

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba);

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba);

    /// Monospace text with its top-left corner at `(x, y)`.
    fn text(&mut self, x: i32, y: i32, text: &str, color: Rgba);

    /// Width in pixels that `text` occupies; defaults to a 6-pixel cell font.
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * 6
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        (**self).fill_rect(x, y, w, h, color)
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba) {
        (**self).fill_circle(cx, cy, radius, color)
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        (**self).line(x0, y0, x1, y1, color)
    }

    fn text(&mut self, x: i32, y: i32, text: &str, color: Rgba) {
        (**self).text(x, y, text, color)
    }

    fn text_width(&self, text: &str) -> i32 {
        (**self).text_width(text)
    }
}
