use crate::cli::commands::CliArgs;
use crate::cli::output::OutputFormatter;
use crate::config::RoutefixConfig;
use crate::fs::{RealFileSystem, RootedFileSystem};
use crate::runner::{self, RunReport};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{debug, error, info};

/// Run the patcher and return the process exit code
///
/// `config` must already carry the command-line overrides (see
/// [`CliArgs::apply_to`]).
pub fn handle_fix(args: &CliArgs, config: RoutefixConfig) -> i32 {
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 1;
    }
    debug!(root = %config.root.display(), targets = config.targets.len(), "configuration loaded");

    let formatter = OutputFormatter::new(args.format.into());
    match execute(&config, &formatter, args.verbose) {
        Ok(report) => {
            info!(
                fixed = report.fixed_count(),
                not_found = report.not_found_count(),
                "run finished"
            );
            0
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

fn execute(
    config: &RoutefixConfig,
    formatter: &OutputFormatter,
    verbose: bool,
) -> Result<RunReport> {
    let fs = RootedFileSystem::new(RealFileSystem::new(), config.root.clone());
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if formatter.streams_status() {
        let report = runner::run(&fs, &config.targets, &mut stdout)?;
        if verbose {
            eprintln!("{}", formatter.format(&report)?);
        }
        return Ok(report);
    }

    let report = runner::run(&fs, &config.targets, &mut io::sink())?;
    writeln!(stdout, "{}", formatter.format(&report)?).context("Failed to write report")?;
    Ok(report)
}
