//! Error handling for RasterView
//!
//! Provides the error types for all layers of the viewer:
//! - Codec errors (reading/writing raster files)
//! - Viewer errors (façade operations that can fail)
//! - History errors (undo/redo configuration)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Codec error type
///
/// Raised at the image reader/writer boundary. The viewer never lets these
/// escape into the paint loop.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The file could not be decoded into a raster image
    #[error("Failed to read '{}': {reason}", .path.display())]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// The reason reported by the decoder.
        reason: String,
    },

    /// The image could not be encoded to the file
    #[error("Failed to save image to '{}': {reason}", .path.display())]
    Encode {
        /// The file that failed to encode.
        path: PathBuf,
        /// The reason reported by the encoder.
        reason: String,
    },

    /// No codec is able to handle the file
    #[error("Unsupported image format: '{}'", .path.display())]
    UnsupportedFormat {
        /// The offending file.
        path: PathBuf,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Viewer error type
///
/// Represents failures of the viewer façade that are reported to the caller.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Operation requires an image but none is displayed
    #[error("No image loaded")]
    NoImage,

    /// Reading or writing the image failed
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A drawing surface of the requested size could not be allocated
    #[error("Cannot allocate a {width}x{height} drawing surface")]
    Surface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

/// History error type
///
/// Represents invalid configuration of the undo/redo history.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Capacity must be at least one entry
    #[error("Undo capacity must be > 0")]
    ZeroCapacity,

    /// Capacity can only change while the history is empty
    #[error("Cannot change undo capacity after {undo} undo and {redo} redo steps occurred")]
    NotEmpty {
        /// Entries on the undo stack.
        undo: usize,
        /// Entries on the redo stack.
        redo: usize,
    },
}

/// Main error type for RasterView
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Codec error
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Viewer error
    #[error(transparent)]
    Viewer(#[from] ViewerError),

    /// History error
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a codec error, directly or through the viewer
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Error::Codec(_) | Error::Viewer(ViewerError::Codec(_)))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
