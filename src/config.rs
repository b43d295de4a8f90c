//! Configuration management for routefix
//!
//! Settings are loaded from environment variables with defaults. CLI flags
//! override whatever the environment provides.
//!
//! # Environment Variables
//!
//! - `ROUTEFIX_ROOT`: Directory the target paths are resolved against - default: "."
//! - `ROUTEFIX_LOG_LEVEL`: Logging level - default: "warn"
//! - `ROUTEFIX_LOG_JSON`: Emit JSON logs (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use routefix::RoutefixConfig;
//!
//! let config = RoutefixConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_ROOT: &str = ".";
const DEFAULT_LOG_LEVEL: &str = "warn";
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Route handlers still using synchronous `{ params }` destructuring
pub const DEFAULT_ROUTE_FILES: [&str; 10] = [
    "src/app/api/dca-portfolios/[id]/route.ts",
    "src/app/api/dca-transactions/[id]/route.ts",
    "src/app/api/holdings-snapshots/[id]/route.ts",
    "src/app/api/network-fees/[id]/route.ts",
    "src/app/api/non-current-assets/[id]/route.ts",
    "src/app/api/partita-iva/income/[id]/route.ts",
    "src/app/api/partita-iva/tax-payments/[id]/route.ts",
    "src/app/api/transactions/[id]/route.ts",
    "src/app/api/transfers/[id]/route.ts",
    "src/app/api/debug/crypto-portfolio/route.ts",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Root directory is not usable: {0}")]
    InvalidRoot(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone)]
pub struct RoutefixConfig {
    /// Directory the relative target paths are resolved against
    pub root: PathBuf,

    /// Files to patch, in processing order
    pub targets: Vec<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Raw `ROUTEFIX_LOG_JSON` value; checked by `validate()`
    pub log_json: Option<String>,
}

impl Default for RoutefixConfig {
    fn default() -> Self {
        let root = env::var("ROUTEFIX_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ROOT));

        let log_level = env::var("ROUTEFIX_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("ROUTEFIX_LOG_JSON").ok();

        Self {
            root,
            targets: default_targets(),
            log_level,
            log_json,
        }
    }
}

impl RoutefixConfig {
    /// Override the target list; an empty list keeps the defaults
    pub fn with_targets(mut self, targets: Vec<PathBuf>) -> Self {
        if !targets.is_empty() {
            self.targets = targets;
        }
        self
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }

    /// Whether logs should be JSON; unparsable values fall back to false
    pub fn json_logs(&self) -> bool {
        self.log_json
            .as_deref()
            .and_then(|v| parse_bool_flag("ROUTEFIX_LOG_JSON", v).ok())
            .unwrap_or(false)
    }

    /// Checks the log level and JSON flag, and that the root is a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }

        if let Some(raw) = &self.log_json {
            parse_bool_flag("ROUTEFIX_LOG_JSON", raw)?;
        }

        if !self.root.exists() {
            return Err(ConfigError::InvalidRoot(format!(
                "{} does not exist",
                self.root.display()
            )));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::InvalidRoot(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        Ok(())
    }
}

/// The built-in target list as owned paths
pub fn default_targets() -> Vec<PathBuf> {
    DEFAULT_ROUTE_FILES.iter().map(PathBuf::from).collect()
}

/// Parse a boolean environment-style flag, as used by `ROUTEFIX_LOG_JSON`
pub fn parse_bool_flag(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::ParseError {
            field: field.to_string(),
            error: format!("expected a boolean, got '{}'", other),
        }),
    }
}
