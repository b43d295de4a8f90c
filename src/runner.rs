//! Sequential patch run over an ordered target list

use crate::fs::FileSystem;
use crate::patcher::{fix_file, FileOutcome, PatchError};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Final line printed once every target has been processed
pub const COMPLETION_LINE: &str = "All files fixed!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn fixed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Fixed(_)))
            .count()
    }

    pub fn not_found_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::NotFound)
            .count()
    }

    /// Files that were rewritten although no rule matched
    pub fn unchanged_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Fixed(stats) if stats.is_unchanged()))
            .count()
    }
}

/// Human-readable status line for one processed target
pub fn status_line(path: &Path, outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Fixed(_) => format!("Fixed {}", path.display()),
        FileOutcome::NotFound => format!("File not found: {}", path.display()),
    }
}

/// Patch every target in order, writing one status line per file to `out`
///
/// The first read or write failure aborts the run; lines already written
/// for earlier targets stay written.
pub fn run<F, W>(fs: &F, targets: &[PathBuf], out: &mut W) -> Result<RunReport, PatchError>
where
    F: FileSystem,
    W: Write,
{
    let mut report = RunReport::default();
    debug!(targets = targets.len(), "starting patch run");

    for path in targets {
        let outcome = fix_file(fs, path).map_err(|e| {
            error!(path = %path.display(), error = %e, "aborting patch run");
            e
        })?;

        writeln!(out, "{}", status_line(path, &outcome))?;
        report.files.push(FileReport {
            path: path.clone(),
            outcome,
        });
    }

    writeln!(out, "{}", COMPLETION_LINE)?;
    out.flush()?;

    debug!(
        fixed = report.fixed_count(),
        not_found = report.not_found_count(),
        "patch run complete"
    );
    Ok(report)
}
