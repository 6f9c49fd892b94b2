//! The per-file scanning pipeline.
//!
//! Each file is one sequential pass: every line is sanitized, then run
//! through declaration extraction, assignment detection and use
//! classification, threading a single [`VariableTable`] and warning buffer
//! through the whole file. Both are per-file values; nothing leaks from
//! one file's scan into the next, which is also what makes scanning
//! independent files in parallel safe.

use std::fs;
use std::path::Path;

use crate::issue::Warning;
use crate::sanitize::sanitize_line;
use crate::trace::TraceSink;

pub mod assignments;
pub mod declarations;
pub mod table;
pub mod uses;

use assignments::scan_assignments;
use declarations::{TYPE_KEYWORDS, scan_declaration};
use table::VariableTable;
use uses::scan_uses;

/// Use-detection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Suppress address-of, subscript, call and member-access contexts
    /// (the default): fewer false alarms, more misses.
    Conservative,
    /// Report every non-assignment occurrence: more recall, more noise.
    Noisy,
}

/// Everything the reporter needs for one file: the raw lines (for source
/// echo), the warnings in scan order, and the open failure, if any.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub lines: Vec<String>,
    pub warnings: Vec<Warning>,
    pub read_error: Option<String>,
}

/// Stateful scanner for exactly one file.
pub struct FileScanner<'a> {
    file: String,
    mode: Mode,
    keywords: Vec<String>,
    table: VariableTable,
    warnings: Vec<Warning>,
    trace: &'a dyn TraceSink,
}

impl<'a> FileScanner<'a> {
    pub fn new(
        file: &str,
        mode: Mode,
        extra_keywords: &[String],
        trace: &'a dyn TraceSink,
    ) -> Self {
        let mut keywords: Vec<String> = TYPE_KEYWORDS.iter().map(|s| s.to_string()).collect();
        keywords.extend(extra_keywords.iter().cloned());
        Self {
            file: file.to_string(),
            mode,
            keywords,
            table: VariableTable::new(),
            warnings: Vec::new(),
            trace,
        }
    }

    /// Run the pipeline over every line and drain the collected warnings.
    pub fn scan_lines(mut self, lines: &[String]) -> Vec<Warning> {
        for (idx, line) in lines.iter().enumerate() {
            self.process_line(line, idx + 1);
        }
        self.trace.event(&format!(
            "{}: {} variable(s) tracked, {} warning(s)",
            self.file,
            self.table.len(),
            self.warnings.len()
        ));
        self.warnings
    }

    fn process_line(&mut self, raw: &str, line_num: usize) {
        let sanitized = sanitize_line(raw);
        if sanitized.trim().is_empty() {
            return;
        }

        // A declaration line is only use-scanned when some declarator had
        // an initializer: `int y = x + 1;` must still find the read of
        // `x`, while `int x;` must not flag its own declarator.
        let mut scan_for_uses = true;
        if let Some(any_init) = scan_declaration(
            &sanitized,
            &self.file,
            line_num,
            &self.keywords,
            &mut self.table,
            self.trace,
        ) {
            scan_for_uses = any_init;
        }

        scan_assignments(&sanitized, line_num, &mut self.table, self.trace);

        if scan_for_uses {
            for (col, name) in scan_uses(&sanitized, line_num, &self.table, self.mode, self.trace)
            {
                self.warnings
                    .push(Warning::new(&self.file, line_num, col, &name));
            }
        }
    }
}

/// Read and scan one file.
///
/// An unreadable file is not fatal: the failure is recorded on the report
/// and the scan proceeds over an empty line sequence, which yields the
/// "no warnings" summary for that file. That blind spot is longstanding
/// behavior, kept on purpose.
pub fn scan_file(
    path: &Path,
    mode: Mode,
    extra_keywords: &[String],
    trace: &dyn TraceSink,
) -> FileReport {
    let display = path.display().to_string();
    let (lines, read_error) = match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            (text.lines().map(str::to_string).collect(), None)
        }
        Err(err) => (
            Vec::new(),
            Some(format!("Cannot open file {}: {}", display, err)),
        ),
    };

    let warnings = FileScanner::new(&display, mode, extra_keywords, trace).scan_lines(&lines);

    FileReport {
        path: display,
        lines,
        warnings,
        read_error,
    }
}
