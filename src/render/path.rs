//! Vector-path glue: feeding control-point runs into the spline rasterizer.
//!
//! A vector path source supplies each shape as an ordered list of
//! floating-point control points where every cubic segment shares its
//! endpoint with the next. This module walks that list and hands each
//! segment to the float spline rasterizer.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::{CubicBezier, Point};
use crate::render::line::draw_line;
use crate::render::spline::draw_spline_f;

/// Draw a run of cubic segments through `points`.
///
/// Every four consecutive points form one curve, stepping by three so that
/// adjacent segments share an endpoint. A trailing partial segment (and any
/// run shorter than four points) draws nothing.
pub fn draw_path(bmp: &mut Bitmap, points: &[Point], color: Color) {
    for quad in points.windows(4).step_by(3) {
        let curve = CubicBezier::new(quad[0], quad[1], quad[2], quad[3]);
        draw_spline_f(bmp, &curve, color);
    }
}

/// Draw a small X marker centered on `(x, y)`, arms three pixels long.
///
/// Handy for visualizing curve control points.
pub fn draw_cross(bmp: &mut Bitmap, x: i32, y: i32, color: Color) {
    draw_line(bmp, x - 3, y - 3, x + 3, y + 3, color);
    draw_line(bmp, x + 3, y - 3, x - 3, y + 3, color);
}
