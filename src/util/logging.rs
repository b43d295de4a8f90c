//! Structured logging setup for routefix
//!
//! Logs go to stderr through the `tracing` ecosystem so that the status
//! lines on stdout stay byte-exact. `RUST_LOG` takes precedence over the
//! configured level when it is set.
//!
//! # Example
//!
//! ```no_run
//! use routefix::util::{init_logging, LoggingConfig};
//! use routefix::RoutefixConfig;
//!
//! init_logging(LoggingConfig::from(&RoutefixConfig::default()));
//!
//! use tracing::{debug, info};
//! info!("Starting patch run");
//! debug!(path = "src/app/api/transfers/[id]/route.ts", "Reading route file");
//! ```

use crate::config::RoutefixConfig;
use std::env;
use std::io::IsTerminal;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., routefix::patcher) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    /// Defaults: WARN, pretty console output, targets on, no locations.
    ///
    /// WARN keeps a plain run quiet apart from the status lines.
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl From<&RoutefixConfig> for LoggingConfig {
    fn from(config: &RoutefixConfig) -> Self {
        Self {
            level: parse_level(&config.log_level),
            use_json: config.json_logs(),
            ..Default::default()
        }
    }
}

/// Parses a log level from a string, falling back to INFO
///
/// ```
/// use routefix::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn crate_directive(level: Level) -> Option<Directive> {
    format!("{}={}", crate::NAME, level).parse().ok()
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    let filter = EnvFilter::new("warn");
    match crate_directive(config.level) {
        Some(directive) => filter.add_directive(directive),
        None => filter,
    }
}

/// Initializes the logging system; later calls are ignored
///
/// Colour codes are only written when stderr is a terminal.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(&config);
        let ansi = std::io::stderr().is_terminal();

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_ansi(ansi)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(ansi)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        }
    });
}
