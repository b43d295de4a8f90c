//! routefix - migrate Next.js dynamic route handlers to promise-wrapped params
//!
//! Next.js 15 hands dynamic route segments to handlers as a `Promise`. This
//! crate rewrites handlers written against the old synchronous shape:
//!
//! ```text
//! { params }: { params: { id: string } }
//!     becomes
//! context: { params: Promise<{ id: string }> }
//! ```
//!
//! and inserts `const params = await context.params` ahead of each
//! `parseInt(params.id)`.
//!
//! # Project Structure
//!
//! - [`patcher`]: the text transformations and single-file patching
//! - [`runner`]: sequential processing of a target list with status output
//! - [`fs`]: file system abstraction with real, rooted and in-memory backends
//! - [`config`]: environment-driven configuration and the default target list
//! - [`cli`]: argument parsing, output formatting and the command handler

pub mod cli;
pub mod config;
pub mod fs;
pub mod patcher;
pub mod runner;
pub mod util;

pub use config::{ConfigError, RoutefixConfig, DEFAULT_ROUTE_FILES};
pub use patcher::{fix_file, transform_source, FileOutcome, PatchError, PatchStats};
pub use runner::{run, FileReport, RunReport, COMPLETION_LINE};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_routefix() {
        assert_eq!(NAME, "routefix");
    }
}
