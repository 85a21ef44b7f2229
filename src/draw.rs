//! Drawing primitives on an RGBA canvas.
//!
//! Fills and glyphs composite source-over. Strokes write their color
//! straight into the pixel, alpha included, so a translucent line stays
//! see-through in the saved PNG. Rectangles use inclusive corners, so
//! `fill_rect(c, 0, 0, 9, 9, ..)` covers a 10x10 block.

use crate::fonts::FontFace;
use image::{Rgba, RgbaImage};
use rusttype::point;

/// Composite `src` over `dst` with `src` alpha scaled by `coverage`.
pub fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let src_alpha = f32::from(src[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if src_alpha <= 0.0 {
        return;
    }

    let dst_alpha = f32::from(dst[3]) / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    for i in 0..3 {
        let c = (f32::from(src[i]) * src_alpha
            + f32::from(dst[i]) * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        dst[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Clamp an inclusive span to `0..limit`, returning `None` if nothing is left.
fn clamp_span(start: i64, end: i64, limit: u32) -> Option<(u32, u32)> {
    let start = start.max(0);
    let end = end.min(i64::from(limit) - 1);
    if start > end {
        return None;
    }
    Some((start as u32, end as u32))
}

/// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)`.
pub fn fill_rect(canvas: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    let (Some((x0, x1)), Some((y0, y1))) = (
        clamp_span(x0, x1, canvas.width()),
        clamp_span(y0, y1, canvas.height()),
    ) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            blend(canvas.get_pixel_mut(x, y), color, 1.0);
        }
    }
}

/// Pixel coverage for a set of strokes sharing one color.
///
/// Covered pixels are replaced by the stroke color, so a crossing has the
/// same value as the rest of the line.
pub struct StrokeMask {
    width: u32,
    height: u32,
    covered: Vec<bool>,
}

impl StrokeMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            covered: vec![false; width as usize * height as usize],
        }
    }

    pub fn is_covered(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.covered[(y * self.width + x) as usize]
    }

    pub fn covered_count(&self) -> usize {
        self.covered.iter().filter(|&&c| c).count()
    }

    /// Mark the inclusive rectangle `(x0, y0)..=(x1, y1)`.
    pub fn mark_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (Some((x0, x1)), Some((y0, y1))) = (
            clamp_span(x0, x1, self.width),
            clamp_span(y0, y1, self.height),
        ) else {
            return;
        };

        for y in y0..=y1 {
            let row = (y * self.width) as usize;
            self.covered[row + x0 as usize..=row + x1 as usize].fill(true);
        }
    }

    /// Horizontal line at `y` from `x0` to `x1`, `stroke` pixels thick
    /// centered on `y` (even widths lean towards larger y).
    pub fn hline(&mut self, y: i64, x0: i64, x1: i64, stroke: u32) {
        let top = y - i64::from(stroke.saturating_sub(1) / 2);
        self.mark_rect(x0, top, x1, top + i64::from(stroke) - 1);
    }

    /// Vertical line at `x` from `y0` to `y1`, centered like [`Self::hline`].
    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, stroke: u32) {
        let left = x - i64::from(stroke.saturating_sub(1) / 2);
        self.mark_rect(left, y0, left + i64::from(stroke) - 1, y1);
    }

    /// Rectangle outline drawn inward from the inclusive bounds.
    pub fn outline(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, stroke: u32) {
        let inset = i64::from(stroke) - 1;
        self.mark_rect(x0, y0, x1, y0 + inset);
        self.mark_rect(x0, y1 - inset, x1, y1);
        self.mark_rect(x0, y0, x0 + inset, y1);
        self.mark_rect(x1 - inset, y0, x1, y1);
    }

    /// Write `color` into every covered pixel, replacing what was there.
    pub fn paint(&self, canvas: &mut RgbaImage, color: Rgba<u8>) {
        let width = self.width.min(canvas.width());
        let height = self.height.min(canvas.height());
        for y in 0..height {
            for x in 0..width {
                if self.is_covered(x, y) {
                    canvas.put_pixel(x, y, color);
                }
            }
        }
    }
}

/// Advance width of `text` laid out with `face`, kerning included.
pub fn text_width(face: &FontFace, text: &str) -> f32 {
    face.font()
        .layout(text, face.scale(), point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Draw `text` with its middle-middle point at `(cx, cy)`.
///
/// Horizontally the advance width is centered; vertically the midpoint
/// between ascender and descender lands on `cy`.
pub fn draw_text_centered(
    canvas: &mut RgbaImage,
    face: &FontFace,
    text: &str,
    (cx, cy): (f32, f32),
    color: Rgba<u8>,
) {
    let scale = face.scale();
    let metrics = face.font().v_metrics(scale);
    let origin = point(
        cx - text_width(face, text) / 2.0,
        cy + (metrics.ascent + metrics.descent) / 2.0,
    );

    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    for glyph in face.font().layout(text, scale, origin) {
        let Some(bounds) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|x, y, coverage| {
            let px = bounds.min.x + x as i32;
            let py = bounds.min.y + y as i32;
            if px >= 0 && px < width && py >= 0 && py < height {
                blend(canvas.get_pixel_mut(px as u32, py as u32), color, coverage);
            }
        });
    }
}
