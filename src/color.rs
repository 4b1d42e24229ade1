//! Palette-index color type.
//!
//! Pixels are single-byte palette indices. Which RGBA value an index maps to
//! is owned entirely by the display adapter; the rasterizer only moves the
//! bytes around.

/// An 8-bit palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Color(u8);

impl Color {
    /// Palette index 0, conventionally the background.
    pub const BACKGROUND: Self = Self::new(0);

    /// Create a color from a palette index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The raw palette index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Self::new(index)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.index()
    }
}
