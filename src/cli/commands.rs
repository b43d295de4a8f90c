use crate::config::RoutefixConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Migrate Next.js dynamic route handlers to promise-wrapped params
#[derive(Parser, Debug)]
#[command(
    name = "routefix",
    about = "Migrate Next.js dynamic route handlers to promise-wrapped params",
    version,
    long_about = "routefix rewrites `{ params }: { params: { id: string } }` route handler \
                  parameters into `context: { params: Promise<{ id: string }> }` and inserts \
                  `const params = await context.params` before each `parseInt(params.id)`.\n\n\
                  Examples:\n  \
                  routefix\n  \
                  routefix --root ../web\n  \
                  routefix src/app/api/categories/[id]/route.ts\n  \
                  routefix --format json"
)]
pub struct CliArgs {
    #[arg(
        value_name = "PATHS",
        help = "Route files to patch (defaults to the built-in list)"
    )]
    pub paths: Vec<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory the route paths are resolved against (defaults to ROUTEFIX_ROOT or .)"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Set logging level"
    )]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Log every rewrite and print a run summary")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Layer the command-line overrides on top of the environment config
    pub fn apply_to(&self, config: RoutefixConfig) -> RoutefixConfig {
        let mut config = config.with_targets(self.paths.clone());
        if let Some(root) = &self.root {
            config = config.with_root(root.clone());
        }
        config.log_level = self.effective_log_level(&config.log_level);
        config
    }

    /// Explicit level, then verbosity flags, then the configured fallback
    pub fn effective_log_level(&self, configured: &str) -> String {
        if let Some(level) = &self.log_level {
            level.clone()
        } else if self.verbose {
            "debug".to_string()
        } else if self.quiet {
            "error".to_string()
        } else {
            configured.to_string()
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}
