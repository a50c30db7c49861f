//! Half-block compositing: two canvas pixel rows per terminal row.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{blend, PixelCanvas};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

/// Terminal size (columns, rows) needed to show a canvas.
pub fn cells_for(canvas_width: u16, canvas_height: u16) -> (u16, u16) {
    (canvas_width, canvas_height.div_ceil(2))
}

/// Canvas size that fills a terminal of `cols` x `rows`.
pub fn canvas_for(cols: u16, rows: u16) -> (u16, u16) {
    (cols, rows.saturating_mul(2))
}

/// Compose the canvas into `fb`, resizing it when needed.
///
/// Every cell becomes an upper half block; labels are then written on top,
/// keeping the averaged pixel colours as their background.
pub fn compose(canvas: &PixelCanvas, fb: &mut FrameBuffer) {
    let (cols, rows) = cells_for(canvas.width(), canvas.height());
    fb.resize(cols, rows);

    for row in 0..rows {
        let y = row as i32 * 2;
        for col in 0..cols {
            let x = col as i32;
            let top = canvas.pixel(x, y).unwrap_or_default();
            // Odd heights leave the last bottom pixel empty.
            let bottom = canvas.pixel(x, y + 1).unwrap_or_default();
            fb.set(col, row, Cell::half_block(top, bottom));
        }
    }

    for label in canvas.labels() {
        if label.y < 0 {
            continue;
        }
        let row = (label.y / 2) as u16;
        for (i, ch) in label.text.chars().enumerate() {
            let x = label.x + i as i32;
            if x < 0 {
                continue;
            }
            let Some(under) = fb.get(x as u16, row) else {
                break;
            };
            let bg = average(under.style.fg, under.style.bg);
            let style = CellStyle {
                fg: blend(bg, label.color),
                bg,
                bold: true,
            };
            fb.put_char(x as u16, row, ch, style);
        }
    }
}

fn average(a: Rgb, b: Rgb) -> Rgb {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    Rgb::new(mid(a.r, b.r), mid(a.g, b.g), mid(a.b, b.b))
}
