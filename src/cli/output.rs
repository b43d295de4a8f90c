//! Output formatting for run reports
//!
//! Human output streams status lines while the run progresses, so the
//! formatter only renders the closing summary for it. JSON and YAML render
//! the whole report once the run is complete.

use anyhow::{Context, Result};

use crate::runner::RunReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Status lines on stdout
    Human,
    Json,
    Yaml,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Whether per-file status lines go to stdout during the run
    pub fn streams_status(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn format(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(self.format_summary(report)),
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize run report to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize run report to YAML")
            }
        }
    }

    fn format_summary(&self, report: &RunReport) -> String {
        format!(
            "{} processed, {} fixed ({} without changes), {} not found",
            report.files.len(),
            report.fixed_count(),
            report.unchanged_count(),
            report.not_found_count()
        )
    }
}
