//! Incremental line rasterization.
//!
//! Implements the classic integer error-accumulator line algorithm. The
//! eight sign/axis cases collapse into a single stepping routine
//! parameterized by axis role and step direction instead of eight copies.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter."

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::Line;
use crate::render::Drawable;

/// Draw a straight segment from `(x1, y1)` to `(x2, y2)`, both endpoints
/// inclusive, honoring the bitmap's clip rectangle.
///
/// The dominant axis advances one pixel per iteration, so exactly
/// `max(|dx|, |dy|) + 1` pixels are plotted, each once. Identical endpoints
/// plot a single pixel.
///
/// Before stepping, the segment's bounding box is tested against the clip
/// rectangle: fully outside is a no-op, fully inside skips the per-pixel
/// clip test for the duration of the call. The clip flag is restored on
/// exit either way.
pub fn draw_line(bmp: &mut Bitmap, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let clip_was_enabled = bmp.clip_enabled();

    if clip_was_enabled {
        let (lo_x, hi_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (lo_y, hi_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        let clip = bmp.clip_rect();

        if lo_x >= clip.right || lo_y >= clip.bottom || hi_x < clip.left || hi_y < clip.top {
            return;
        }

        if lo_x >= clip.left && lo_y >= clip.top && hi_x < clip.right && hi_y < clip.bottom {
            bmp.set_clip_enabled(false);
        }
    }

    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx.abs() >= dy.abs() {
        step_octant(dx.abs(), dy.abs(), step(dx), step(dy), x1, y1, x2, |pri, sec| {
            bmp.set_pixel(pri, sec, color);
        });
    } else {
        step_octant(dy.abs(), dx.abs(), step(dy), step(dx), y1, x1, y2, |pri, sec| {
            bmp.set_pixel(sec, pri, color);
        });
    }

    bmp.set_clip_enabled(clip_was_enabled);
}

/// Unit step in the direction of `delta` (positive for zero).
#[inline]
const fn step(delta: i32) -> i32 {
    if delta >= 0 {
        1
    } else {
        -1
    }
}

/// Step the dominant axis from `pri` to `pri_end` one pixel at a time,
/// advancing the secondary axis whenever the accumulated error crosses zero.
///
/// `d_pri`/`d_sec` are the absolute deltas; `pri_step`/`sec_step` the signed
/// unit steps. A zero primary delta plots a single pixel.
#[allow(clippy::too_many_arguments)]
fn step_octant<F: FnMut(i32, i32)>(
    d_pri: i32,
    d_sec: i32,
    pri_step: i32,
    sec_step: i32,
    mut pri: i32,
    mut sec: i32,
    pri_end: i32,
    mut plot: F,
) {
    if d_pri == 0 {
        plot(pri, sec);
        return;
    }

    let err_step = 2 * d_sec;
    let err_cross = err_step - 2 * d_pri;
    let mut err = err_step - d_pri;

    loop {
        plot(pri, sec);

        if pri == pri_end {
            break;
        }

        if err >= 0 {
            sec += sec_step;
            err += err_cross;
        } else {
            err += err_step;
        }

        pri += pri_step;
    }
}

impl Drawable for Line {
    fn draw(&self, bmp: &mut Bitmap, color: Color) {
        draw_line(
            bmp,
            self.start.x as i32,
            self.start.y as i32,
            self.end.x as i32,
            self.end.y as i32,
            color,
        );
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
