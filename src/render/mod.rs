//! Rasterization routines.
//!
//! # Algorithms
//!
//! - **Incremental line drawing**: error-accumulator stepping with the
//!   eight octants collapsed into one parameterized routine
//! - **Forward-difference spline evaluation**: O(1) per sample after setup,
//!   no per-step division or transcendental work
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter."

mod line;
mod path;
mod spline;

pub use line::draw_line;
pub use path::{draw_cross, draw_path};
pub use spline::{
    draw_spline, draw_spline_f, evaluate, sample_count, Exact, Rounded, SampleBuffer,
    SampleFormat, MAX_SAMPLES,
};

use crate::bitmap::Bitmap;
use crate::color::Color;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a bitmap.
    fn draw(&self, bmp: &mut Bitmap, color: Color);
}
