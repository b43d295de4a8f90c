//! Ordered regex rewrites for route handler signatures
//!
//! Each rule turns a synchronous `{ params }` destructure into a `context`
//! parameter whose `params` field is a `Promise`. Braces in the patterns are
//! literal; the rules only match the exact spacing Next.js templates emit.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

/// Identifies which rewrite produced a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `{ params }: { params: { id: string } }`
    SingleFieldParams,
    /// `{ params }: { params: Promise<{ id: string; <field>: string }> }`
    MultiFieldParams,
    /// One-line `export async function NAME(request: NextRequest, { params }: ...) {`
    InlineDeclaration,
}

impl RuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::SingleFieldParams => "single-field-params",
            RuleKind::MultiFieldParams => "multi-field-params",
            RuleKind::InlineDeclaration => "inline-declaration",
        }
    }
}

pub struct RewriteRule {
    pub kind: RuleKind,
    regex: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    fn new(kind: RuleKind, pattern: &str, replacement: &'static str) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("rewrite patterns are valid regex literals"),
            replacement,
        }
    }

    /// Replace every match in `text`, returning the new text and the match count
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = self.regex.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }

        let rewritten = self.regex.replace_all(text, self.replacement).into_owned();
        debug!(rule = self.kind.name(), count, "applied rewrite rule");
        (rewritten, count)
    }
}

// The inner `}` of the single-field pattern is optional, so a declaration
// missing that brace is still rewritten.
const SINGLE_FIELD_PATTERN: &str = r"\{ params \}: \{ params: \{ id: string \}? \}";
const SINGLE_FIELD_REPLACEMENT: &str = "context: { params: Promise<{ id: string }> }";

const MULTI_FIELD_PATTERN: &str =
    r"\{ params \}: \{ params: Promise<\{ id: string; (\w+): string \}> \}";
const MULTI_FIELD_REPLACEMENT: &str = "context: { params: Promise<{ id: string; ${1}: string }> }";

const INLINE_DECLARATION_PATTERN: &str = r"export async function (\w+)\(request: NextRequest, \{ params \}: \{ params: \{ id: string \} \}\) \{";
const INLINE_DECLARATION_REPLACEMENT: &str = "export async function ${1}(request: NextRequest, context: { params: Promise<{ id: string }> }) {";

/// The rewrite rules in application order
pub fn rewrite_rules() -> &'static [RewriteRule] {
    static RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            RewriteRule::new(
                RuleKind::SingleFieldParams,
                SINGLE_FIELD_PATTERN,
                SINGLE_FIELD_REPLACEMENT,
            ),
            RewriteRule::new(
                RuleKind::MultiFieldParams,
                MULTI_FIELD_PATTERN,
                MULTI_FIELD_REPLACEMENT,
            ),
            RewriteRule::new(
                RuleKind::InlineDeclaration,
                INLINE_DECLARATION_PATTERN,
                INLINE_DECLARATION_REPLACEMENT,
            ),
        ]
    })
}
