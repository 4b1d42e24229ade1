//! Display adapter contract.
//!
//! The rasterizer never presents pixels itself. A backend implements
//! [`DisplayTarget`] and owns the window, the palette-to-RGBA expansion,
//! and the event pump; the core hands it one finished frame at a time.

use crate::bitmap::Bitmap;
use crate::error::Result;

/// A presentable display surface consuming finished palette-index frames.
pub trait DisplayTarget: Sized {
    /// Open a display surface with the given title and pixel dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot create the surface.
    fn open(title: &str, width: u32, height: u32) -> Result<Self>;

    /// Blit one frame of `width * height` palette indices to the screen,
    /// expanding palette entries and servicing window events as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot present the frame.
    fn present(&mut self, pixels: &[u8]) -> Result<()>;
}

/// Present a bitmap's pixel store on `target`.
///
/// # Errors
///
/// Propagates the backend's presentation error.
pub fn present_frame<T: DisplayTarget>(bmp: &Bitmap, target: &mut T) -> Result<()> {
    target.present(bmp.pixels())
}
