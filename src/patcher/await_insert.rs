//! Inserts `const params = await context.params` ahead of `params.id` parsing

/// Line that resolves the promise-wrapped params into a local binding
pub const AWAIT_PARAMS_LINE: &str = "const params = await context.params";

const USAGE_MARKER: &str = "parseInt(params.id)";
const EXTRACTION_MARKER: &str = "await context.params";
const FUNCTION_MARKERS: [&str; 3] = ["function ", "function(", "=> {"];

/// Insert an awaited extraction above each `parseInt(params.id)` line that
/// is not already covered by one.
///
/// An extraction covers later usages at the same brace depth or deeper until
/// its enclosing block closes. A function starting at the top level clears
/// coverage; nested callbacks keep it, since they close over the outer
/// binding. Braces are counted per character, so braces inside string
/// literals are miscounted.
///
/// Lines are split on `\n` only, so `\r` and a trailing newline survive
/// untouched. Returns the new text and the number of inserted lines.
pub fn insert_await_params(text: &str) -> (String, usize) {
    let mut lines: Vec<String> = Vec::new();
    let mut depth: i64 = 0;
    let mut covered_at: Option<i64> = None;
    let mut inserted = 0;

    for line in text.split('\n') {
        let line_depth = depth;

        if line_depth <= 0 && opens_function(line) {
            covered_at = None;
        }
        if line.contains(EXTRACTION_MARKER) {
            covered_at = Some(line_depth);
        }

        let covered = matches!(covered_at, Some(at) if line_depth >= at);
        if line.contains(USAGE_MARKER) && !covered {
            lines.push(format!("{}{}", leading_whitespace(line), AWAIT_PARAMS_LINE));
            inserted += 1;
            covered_at = Some(line_depth);
        }

        let lowest = track_braces(line, &mut depth);
        if matches!(covered_at, Some(at) if lowest < at) {
            covered_at = None;
        }

        lines.push(line.to_string());
    }

    (lines.join("\n"), inserted)
}

fn opens_function(line: &str) -> bool {
    FUNCTION_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Apply the line's braces to `depth`, returning the lowest depth reached
fn track_braces(line: &str, depth: &mut i64) -> i64 {
    let mut lowest = *depth;
    for ch in line.chars() {
        match ch {
            '{' => *depth += 1,
            '}' => {
                *depth -= 1;
                lowest = lowest.min(*depth);
            }
            _ => {}
        }
    }
    lowest
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
