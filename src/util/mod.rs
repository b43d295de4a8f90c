//! Utility modules for routefix

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
