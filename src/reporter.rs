//! Diagnostic printing.
//!
//! This module is separate from the scanning logic so the crate can be used
//! as a library without printing side effects. Output format, per warning:
//!
//! ```text
//! <file>:<line>:<col>: warning: use of possibly uninitialized variable '<name>'
//! <source line>
//! <caret prefix>^
//! ```
//!
//! followed by a one-line per-file summary. Colors respect `NO_COLOR` and
//! are dropped automatically when stdout is not a terminal.

use colored::Colorize;
use unicode_width::UnicodeWidthChar;

use crate::scan::FileReport;

/// Print one file's report: open failure (if any) to stderr, then each
/// warning with its source echo and caret, then the summary line.
///
/// Warnings come out exactly in the order they were collected during the
/// scan: line-ascending, left to right within a line.
pub fn print_report(report: &FileReport) {
    if let Some(err) = &report.read_error {
        eprintln!("{} {}", "error:".bold().red(), err);
    }

    for warning in &report.warnings {
        println!(
            "{}: {} {}",
            warning.location,
            "warning:".bold().yellow(),
            warning.message()
        );

        let line = report
            .lines
            .get(warning.location.line.saturating_sub(1))
            .map(String::as_str)
            .unwrap_or("");
        println!("{}", line);
        println!("{}{}", caret_prefix(line, warning.location.col), "^".yellow());
    }

    let summary = summary_line(report);
    if report.warnings.is_empty() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }
}

fn summary_line(report: &FileReport) -> String {
    if report.warnings.is_empty() {
        format!("{}: OK: no warnings", report.path)
    } else {
        format!("{}: {} warning(s)", report.path, report.warnings.len())
    }
}

/// Build the whitespace run that positions the caret under byte column
/// `col` of `line`.
///
/// Tabs are echoed as tabs so the caret stays visually aligned with the
/// echoed source line whatever the terminal's tab width; every other
/// character contributes its display width in spaces (wide characters
/// count double, combining marks count zero).
///
/// `col` is a column into the *sanitized* line while the echoed `line` is
/// the raw one. The two agree up to the first stripped region, so when a
/// string literal or block comment was removed earlier on the line the
/// caret lands left of the occurrence by the width of the removed text.
/// That skew is inherent to zero-width string removal and is accepted; the
/// `<file>:<line>:<col>` prefix carries the same column.
fn caret_prefix(line: &str, col: usize) -> String {
    let mut prefix = String::new();
    for (offset, ch) in line.char_indices() {
        if offset >= col {
            break;
        }
        if ch == '\t' {
            prefix.push('\t');
        } else {
            for _ in 0..ch.width().unwrap_or(0) {
                prefix.push(' ');
            }
        }
    }
    prefix
}
