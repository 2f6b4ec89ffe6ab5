//! # RasterView
//!
//! An interactive raster image viewport with:
//! - Arbitrary zoom factors and a fit-to-panel mode
//! - Mouse-driven rectangular region selection reported in image pixels
//! - Pluggable overlays and paint passes composited over the image
//! - Bounded undo/redo history of viewer state
//!
//! ## Architecture
//!
//! RasterView is organized as a workspace with multiple crates:
//!
//! 1. **rasterview-core** - Geometry, colours, metadata reports, errors
//! 2. **rasterview-settings** - Configuration model and persistence
//! 3. **rasterview-viewer** - Viewport, overlays, selection, rendering, history
//! 4. **rasterview** - Sample overlays and the headless `rasterview` binary

pub mod overlays;

pub use rasterview_core::{
    CodecError, Color, Error, HistoryError, PixelPoint, PixelRect, Report, ReportValue, Result,
    ScreenPoint, Size, ViewerError,
};

pub use rasterview_settings::{
    Config, ConfigError, HistorySettings, LoggingSettings, SettingsError, ViewerSettings,
};

pub use rasterview_viewer::{
    DefaultCodec, History, Image, ImageReader, ImageWriter, LeftClickEvent, LeftClickListener,
    Modifiers, MouseButton, Overlay, OverlayRegistry, Paintlet, PanelView, PointerEvent,
    SelectionEvent, SelectionListener, Surface, Viewer, ViewerCommand, ViewerState, Viewport,
    Zoom,
};

pub use overlays::{GridOverlay, RegionOverlay};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - `RUST_LOG` environment variable support, falling back to the configured level
/// - Human-readable or JSON lines on stderr
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    // stdout carries the status line, so logs go to stderr
    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
