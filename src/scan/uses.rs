//! Use classification: decides, per occurrence of a still-uninitialized
//! variable, whether the occurrence is a read worth reporting.
//!
//! The decision is a pure function of the characters around the occurrence,
//! expressed as a single `UseContext` classification rather than scattered
//! conditionals so the decision table can be tested per character class.

use crate::scan::Mode;
use crate::scan::table::VariableTable;
use crate::trace::TraceSink;

/// What an occurrence of a variable name looks like from its immediate
/// character context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseContext {
    /// A bare occurrence with no suppressing neighbor: a value read.
    Read,
    /// Preceded or followed by `&`.
    AddressOf,
    /// Followed by `[`.
    Subscript,
    /// Followed by `(`.
    Call,
    /// Followed by `.`.
    MemberAccess,
    /// Followed by a standalone `=`: the occurrence is being assigned on
    /// this very line, not read.
    AssignmentTarget,
}

impl UseContext {
    /// Whether this occurrence is reported under the given mode.
    ///
    /// Noisy mode reports everything except assignment targets, favoring
    /// recall. Conservative mode reports only bare reads, suppressing
    /// address-of, subscript, call and member-access contexts; that also
    /// hides true positives like `arr[uninit_index]`, a documented
    /// approximation.
    pub fn reportable(self, mode: Mode) -> bool {
        match mode {
            Mode::Noisy => self != UseContext::AssignmentTarget,
            Mode::Conservative => self == UseContext::Read,
        }
    }
}

fn is_ident_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Classify the occurrence of a name spanning `start..end` in `line`.
pub fn classify_occurrence(line: &str, start: usize, end: usize) -> UseContext {
    let bytes = line.as_bytes();

    let mut after = end;
    while after < bytes.len() && bytes[after].is_ascii_whitespace() {
        after += 1;
    }
    if bytes.get(after) == Some(&b'=') && bytes.get(after + 1) != Some(&b'=') {
        return UseContext::AssignmentTarget;
    }

    let mut before = start;
    while before > 0 && bytes[before - 1].is_ascii_whitespace() {
        before -= 1;
    }
    if before > 0 && bytes[before - 1] == b'&' {
        return UseContext::AddressOf;
    }

    match bytes.get(after) {
        Some(b'[') => UseContext::Subscript,
        Some(b'(') => UseContext::Call,
        Some(b'&') => UseContext::AddressOf,
        Some(b'.') => UseContext::MemberAccess,
        _ => UseContext::Read,
    }
}

/// Byte offsets of every maximal-word occurrence of `name` in `line`:
/// occurrences bounded on both sides by non-identifier characters or the
/// line edges, so a substring of a longer identifier never matches.
pub fn word_occurrences(line: &str, name: &str) -> Vec<usize> {
    let bytes = line.as_bytes();
    let mut found = Vec::new();
    let mut from = 0;

    while let Some(rel) = line[from..].find(name) {
        let start = from + rel;
        let end = start + name.len();
        let bounded_left = start == 0 || !is_ident_byte(bytes[start - 1]);
        let bounded_right = end >= bytes.len() || !is_ident_byte(bytes[end]);
        if bounded_left && bounded_right {
            found.push(start);
        }
        from = start + 1;
    }

    found
}

/// Scan a sanitized line for reportable reads of uninitialized variables.
///
/// Returns `(column, name)` pairs sorted by column, so warnings for one
/// line always come out left to right regardless of table iteration order.
pub fn scan_uses(
    sanitized: &str,
    line_num: usize,
    table: &VariableTable,
    mode: Mode,
    trace: &dyn TraceSink,
) -> Vec<(usize, String)> {
    let mut hits = Vec::new();

    for var in table.uninitialized() {
        for start in word_occurrences(sanitized, &var.name) {
            let context = classify_occurrence(sanitized, start, start + var.name.len());
            if context.reportable(mode) {
                hits.push((start, var.name.clone()));
            } else {
                trace.event(&format!(
                    "line {}: suppressed '{}' at col {} ({:?})",
                    line_num, var.name, start, context
                ));
            }
        }
    }

    hits.sort();
    hits
}
