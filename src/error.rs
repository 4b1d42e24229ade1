//! Error types for bitrast operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bitrast operations.
///
/// The rasterizer itself has no failure paths; errors come from bitmap
/// construction and from display backends implementing
/// [`DisplayTarget`](crate::display::DisplayTarget).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from a display backend.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid dimensions for a bitmap or display surface.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Display backend error (surface creation, presentation).
    #[error("Display error: {0}")]
    Display(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_display_error() {
        let err = Error::Display("window closed".to_string());
        assert!(err.to_string().contains("window closed"));
    }
}
