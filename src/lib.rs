//! # bitrast
//!
//! Minimal palette-indexed software rasterizer: clipped line segments and
//! cubic Bézier splines drawn into an in-memory pixel buffer.
//!
//! Pixels are single-byte palette indices; the mapping from index to RGBA
//! belongs to an external display adapter implementing
//! [`DisplayTarget`](display::DisplayTarget). Everything else is pure
//! in-memory computation: no I/O, no threads, no allocation past setup.
//!
//! Data flows control points → spline evaluator → sample points → line
//! rasterizer → bitmap → display adapter.
//!
//! ## Quick Start
//!
//! ```rust
//! use bitrast::prelude::*;
//!
//! let mut bmp = Bitmap::new(256, 256).unwrap();
//! bmp.clear(Color::BACKGROUND);
//!
//! draw_line(&mut bmp, 10, 10, 200, 120, Color::new(4));
//!
//! let curve = CubicBezier::from_int_coords([10, 250, 80, 10, 170, 10, 250, 250]);
//! draw_spline(&mut bmp, &curve, Color::new(3));
//!
//! // bmp.pixels() is ready to hand to a display adapter.
//! assert_eq!(bmp.pixels().len(), 256 * 256);
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Palette-index color type.
pub mod color;

/// Bitmap surface: pixel store and clip state.
pub mod bitmap;

/// Geometric primitives (points, lines, cubic curves).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization routines.
pub mod render;

/// Display adapter contract.
pub mod display;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for bitrast operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use bitrast::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bitmap::{Bitmap, ClipRect};
    pub use crate::color::Color;
    pub use crate::display::{present_frame, DisplayTarget};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{CubicBezier, Line, Point};
    pub use crate::render::{
        draw_cross, draw_line, draw_path, draw_spline, draw_spline_f, Drawable,
    };
}
