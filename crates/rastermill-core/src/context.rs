//! Scoped drawing primitives over a target pixel buffer.
//!
//! A `DrawingContext` is acquired over an exclusively borrowed target,
//! used for the duration of a single operation, and released when it goes
//! out of scope. The exclusive borrow keeps a context from outliving its
//! operation or being shared across threads; release happens on every
//! exit path, including early returns.

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// A scoped handle exposing primitive draw operations on a target buffer.
pub struct DrawingContext<'a> {
    target: &'a mut PixelBuffer,
    fill: Color,
}

impl<'a> DrawingContext<'a> {
    /// Acquire a context over `target`. The fill color starts black.
    pub fn acquire(target: &'a mut PixelBuffer) -> DrawingContext<'a> {
        tracing::trace!(
            width = target.width(),
            height = target.height(),
            "Acquiring drawing context"
        );
        DrawingContext {
            target,
            fill: Color { r: 0, g: 0, b: 0 },
        }
    }

    /// Set the current fill color.
    pub fn set_color(&mut self, color: Color) {
        self.fill = color;
    }

    /// Flat-fill a rectangle with the current color, clipped to the target.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        self.fill_rect_with(self.fill, x, y, w, h);
    }

    /// Fill a rectangle with a two-tone relief based on the current color.
    ///
    /// `raised` paints the interior in the base color with a highlight
    /// edge on the top/left and a shadow edge on the bottom/right; etched
    /// (`raised == false`) paints a shadow interior with the edge tones
    /// swapped. Edges are 1 pixel wide.
    pub fn fill_rect_3d(&mut self, x: u32, y: u32, w: u32, h: u32, raised: bool) {
        if w == 0 || h == 0 {
            return;
        }
        let base = self.fill;
        let lead = if raised { base.highlight() } else { base.shadow() };
        let trail = if raised { base.shadow() } else { base.highlight() };
        let interior = if raised { base } else { base.shadow() };

        self.fill_rect_with(interior, x + 1, y + 1, w.saturating_sub(2), h.saturating_sub(2));
        self.fill_rect_with(lead, x, y, 1, h);
        self.fill_rect_with(lead, x + 1, y, w.saturating_sub(2), 1);
        self.fill_rect_with(trail, x + 1, y + h - 1, w.saturating_sub(1), 1);
        self.fill_rect_with(trail, x + w - 1, y, 1, h.saturating_sub(1));
    }

    /// Blit `source` unscaled at an integer offset, clipped to the target.
    ///
    /// Negative offsets shift the source off the top/left edge, which
    /// turns the blit into a sub-rectangle copy.
    pub fn draw_image(&mut self, source: &PixelBuffer, dst_x: i64, dst_y: i64) {
        let (tw, th) = (self.target.width() as i64, self.target.height() as i64);
        for sy in 0..source.height() {
            let ty = dst_y + sy as i64;
            if ty < 0 || ty >= th {
                continue;
            }
            for sx in 0..source.width() {
                let tx = dst_x + sx as i64;
                if tx < 0 || tx >= tw {
                    continue;
                }
                self.target.set_pixel(tx as u32, ty as u32, source.pixel(sx, sy));
            }
        }
    }

    /// Blit the source rectangle spanned by corners `(sx0, sy0)`–`(sx1, sy1)`
    /// onto the destination rectangle `(dst_x, dst_y, dst_w, dst_h)`.
    ///
    /// Swapped source corners (`sx1 < sx0` or `sy1 < sy0`) mirror that
    /// axis, which is how flips are expressed. Scaling uses smooth
    /// (bilinear) sampling; a 1:1 mapping per axis degenerates to an
    /// exact per-pixel copy, so mirrored blits round-trip exactly.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image_scaled(
        &mut self,
        source: &PixelBuffer,
        dst_x: i64,
        dst_y: i64,
        dst_w: u32,
        dst_h: u32,
        sx0: u32,
        sy0: u32,
        sx1: u32,
        sy1: u32,
    ) {
        if dst_w == 0 || dst_h == 0 {
            return;
        }
        let span_x = sx1 as f64 - sx0 as f64;
        let span_y = sy1 as f64 - sy0 as f64;
        let exact = sx0.abs_diff(sx1) == dst_w && sy0.abs_diff(sy1) == dst_h;

        let (tw, th) = (self.target.width() as i64, self.target.height() as i64);
        for dy in 0..dst_h {
            let ty = dst_y + dy as i64;
            if ty < 0 || ty >= th {
                continue;
            }
            for dx in 0..dst_w {
                let tx = dst_x + dx as i64;
                if tx < 0 || tx >= tw {
                    continue;
                }
                let pixel = if exact {
                    let sx = if sx1 >= sx0 { sx0 + dx } else { sx0 - 1 - dx };
                    let sy = if sy1 >= sy0 { sy0 + dy } else { sy0 - 1 - dy };
                    source.pixel(sx, sy)
                } else {
                    let u = (dx as f64 + 0.5) / dst_w as f64;
                    let v = (dy as f64 + 0.5) / dst_h as f64;
                    sample_smooth(
                        source,
                        sx0 as f64 + u * span_x - 0.5,
                        sy0 as f64 + v * span_y - 0.5,
                    )
                };
                self.target.set_pixel(tx as u32, ty as u32, pixel);
            }
        }
    }

    fn fill_rect_with(&mut self, color: Color, x: u32, y: u32, w: u32, h: u32) {
        let x1 = x.saturating_add(w).min(self.target.width());
        let y1 = y.saturating_add(h).min(self.target.height());
        let pixel = [255, color.r, color.g, color.b];
        for py in y.min(y1)..y1 {
            for px in x.min(x1)..x1 {
                self.target.set_pixel(px, py, pixel);
            }
        }
    }
}

impl Drop for DrawingContext<'_> {
    fn drop(&mut self) {
        tracing::trace!("Releasing drawing context");
    }
}

/// Sample `source` at fractional coordinates with bilinear interpolation.
///
/// The 4 nearest pixels are weighted by distance; all four channels are
/// interpolated, so partially transparent sources blend their alpha too.
/// Coordinates are clamped to the source grid.
fn sample_smooth(source: &PixelBuffer, x: f64, y: f64) -> [u8; 4] {
    let max_x = (source.width() - 1) as f64;
    let max_y = (source.height() - 1) as f64;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(source.width() - 1);
    let y1 = (y0 + 1).min(source.height() - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = source.pixel(x0, y0);
    let p10 = source.pixel(x1, y0);
    let p01 = source.pixel(x0, y1);
    let p11 = source.pixel(x1, y1);

    let mut result = [0u8; 4];
    for c in 0..4 {
        let v = p00[c] as f64 * (1.0 - fx) * (1.0 - fy)
            + p10[c] as f64 * fx * (1.0 - fy)
            + p01[c] as f64 * (1.0 - fx) * fy
            + p11[c] as f64 * fx * fy;
        result[c] = v.clamp(0.0, 255.0).round() as u8;
    }
    result
}
