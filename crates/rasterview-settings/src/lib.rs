//! RasterView Settings Crate
//!
//! Handles viewer configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, HistorySettings, LoggingSettings, ViewerSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
