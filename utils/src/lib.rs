//! Shared utilities for the algo-assets workspace.

pub mod logging;

pub use logging::{init_logging, level_filter, LogFormat, LoggingError};
