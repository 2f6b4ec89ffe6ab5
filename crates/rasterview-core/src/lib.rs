//! # RasterView Core
//!
//! Core types, geometry, and error handling shared by the RasterView crates.
//! Provides the coordinate types used by the viewport, the metadata report
//! exposed to property panels, and the error taxonomy used across the
//! viewer and codec boundaries.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod report;
pub mod types;

pub use color::Color;
pub use error::{CodecError, Error, HistoryError, Result, ViewerError};
pub use geometry::{PixelPoint, PixelRect, ScreenPoint, Size};
pub use report::{Report, ReportValue};
pub use types::{thread_safe_vec, ThreadSafeVec};
