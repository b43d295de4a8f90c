//! Route handler patcher
//!
//! Migrates Next.js dynamic route handlers from synchronous `{ params }`
//! destructuring to a promise-wrapped `context.params`, then makes sure each
//! `parseInt(params.id)` is preceded by an awaited extraction.
//!
//! # Example
//!
//! ```
//! use routefix::patcher::transform_source;
//!
//! let source = "export async function GET(request: NextRequest, { params }: { params: { id: string } }) {\n  const id = parseInt(params.id)\n}";
//! let (patched, stats) = transform_source(source);
//!
//! assert!(patched.contains("context: { params: Promise<{ id: string }> }"));
//! assert!(patched.contains("  const params = await context.params\n"));
//! assert_eq!(stats.awaits_inserted, 1);
//! ```

mod await_insert;
mod error;
mod rules;

pub use await_insert::{insert_await_params, AWAIT_PARAMS_LINE};
pub use error::PatchError;
pub use rules::{rewrite_rules, RewriteRule, RuleKind};

use crate::fs::FileSystem;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Change counts for a single file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatchStats {
    pub single_field_params: usize,
    pub multi_field_params: usize,
    pub inline_declarations: usize,
    pub awaits_inserted: usize,
}

impl PatchStats {
    fn record(&mut self, kind: RuleKind, count: usize) {
        match kind {
            RuleKind::SingleFieldParams => self.single_field_params += count,
            RuleKind::MultiFieldParams => self.multi_field_params += count,
            RuleKind::InlineDeclaration => self.inline_declarations += count,
        }
    }

    pub fn total(&self) -> usize {
        self.single_field_params
            + self.multi_field_params
            + self.inline_declarations
            + self.awaits_inserted
    }

    pub fn is_unchanged(&self) -> bool {
        self.total() == 0
    }
}

/// Result of patching one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file was rewritten, possibly with zero changes
    Fixed(PatchStats),
    NotFound,
}

/// Apply every rewrite rule in order, then insert awaited extractions
pub fn transform_source(source: &str) -> (String, PatchStats) {
    let mut stats = PatchStats::default();
    let mut text = source.to_string();

    for rule in rewrite_rules() {
        let (rewritten, count) = rule.apply(&text);
        stats.record(rule.kind, count);
        text = rewritten;
    }

    let (text, inserted) = insert_await_params(&text);
    stats.awaits_inserted = inserted;

    (text, stats)
}

/// Patch a single route file in place
///
/// Missing files are reported as [`FileOutcome::NotFound`] without touching
/// the file system. Existing files are always written back, even when no
/// rule matched.
pub fn fix_file<F: FileSystem>(fs: &F, path: &Path) -> Result<FileOutcome, PatchError> {
    if !fs.exists(path) {
        debug!(path = %path.display(), "route file not found, skipping");
        return Ok(FileOutcome::NotFound);
    }

    let source = fs
        .read_to_string(path)
        .map_err(|e| PatchError::read(path, e))?;

    let (patched, stats) = transform_source(&source);

    fs.write(path, &patched)
        .map_err(|e| PatchError::write(path, e))?;

    if stats.is_unchanged() {
        warn!(path = %path.display(), "no pattern matched, file rewritten unchanged");
    } else {
        info!(
            path = %path.display(),
            single_field = stats.single_field_params,
            multi_field = stats.multi_field_params,
            inline = stats.inline_declarations,
            awaits = stats.awaits_inserted,
            "patched route file"
        );
    }

    Ok(FileOutcome::Fixed(stats))
}
