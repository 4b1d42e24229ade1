//! Bitmap surface: an owned palette-index pixel store with rectangular
//! clipping.
//!
//! Pixels are single bytes in row-major order, top row first. An optional
//! axis-aligned clip rectangle discards writes outside its bounds; draw
//! routines save and restore the clip flag around each call.

use crate::color::Color;
use crate::error::{Error, Result};

/// Exclusive clip bounds: pixels with `left <= x < right` and
/// `top <= y < bottom` are writable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    /// Leftmost writable column.
    pub left: i32,
    /// Topmost writable row.
    pub top: i32,
    /// One past the rightmost writable column.
    pub right: i32,
    /// One past the bottommost writable row.
    pub bottom: i32,
}

impl ClipRect {
    /// Create a clip rectangle from its bounds.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// True when `(x, y)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// A palette-indexed pixel surface.
///
/// Created once with fixed dimensions; the pixel store is mutated in place
/// by every draw call. Single-threaded by design: callers serialize access
/// through `&mut Bitmap`.
#[derive(Debug, Clone)]
pub struct Bitmap {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Whether writes are tested against the clip rectangle.
    clip: bool,
    /// Current clip bounds (right/bottom exclusive).
    clip_rect: ClipRect,
    /// Palette indices in row-major order, top row first.
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a new bitmap with the given dimensions.
    ///
    /// Clipping starts enabled and covers the full surface, so freshly
    /// constructed bitmaps accept any write without further setup.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bitrast::bitmap::Bitmap;
    ///
    /// let bmp = Bitmap::new(256, 256).unwrap();
    /// assert_eq!(bmp.width(), 256);
    /// assert_eq!(bmp.height(), 256);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize);

        Ok(Self {
            width,
            height,
            clip: true,
            clip_rect: ClipRect::new(0, 0, width as i32, height as i32),
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel store, one palette index per pixel, row-major.
    ///
    /// This is the buffer handed to a display adapter for presentation.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether writes are currently tested against the clip rectangle.
    #[must_use]
    pub const fn clip_enabled(&self) -> bool {
        self.clip
    }

    /// Turn per-pixel clipping on or off.
    ///
    /// With clipping off, callers must keep every write inside
    /// `[0, width) × [0, height)`.
    pub fn set_clip_enabled(&mut self, enabled: bool) {
        self.clip = enabled;
    }

    /// Get the current clip rectangle.
    #[must_use]
    pub const fn clip_rect(&self) -> ClipRect {
        self.clip_rect
    }

    /// Replace the clip rectangle.
    ///
    /// The rectangle is not validated against the surface; bounds that
    /// extend past it put in-range writes back on the caller.
    pub fn set_clip_rect(&mut self, rect: ClipRect) {
        self.clip_rect = rect;
    }

    /// Read the palette index at `(x, y)` with no bounds or clip checking.
    ///
    /// Diagnostic use; the caller guarantees the coordinates are valid.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the surface.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        Color::new(self.pixels[self.pixel_index(x, y)])
    }

    /// Write the palette index at `(x, y)`.
    ///
    /// With clipping enabled, writes outside the clip rectangle are silently
    /// discarded: the left/right bounds test `x`, the top/bottom bounds
    /// test `y`.
    ///
    /// # Panics
    ///
    /// With clipping disabled, panics if `(x, y)` is outside the surface.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.clip && !self.clip_rect.contains(x, y) {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx] = color.index();
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.index());
    }

    /// Calculate the store index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= 0 && (x as u32) < self.width, "x out of range: {x}");
        debug_assert!(y >= 0 && (y as u32) < self.height, "y out of range: {y}");
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
