//! Assignment detection: every standalone `=` marks its left-hand
//! identifier as initialized.
//!
//! "Standalone" excludes the relational and equality operators `==`, `!=`,
//! `<=`, `>=`. Compound assignments such as `+=` recover no identifier when
//! walking back (the `+` stops the walk), which is deliberate: `x += 1`
//! both reads and writes `x`, and treating it as initializing would hide
//! the read.

use crate::scan::table::VariableTable;
use crate::trace::TraceSink;

fn is_ident_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Scan a sanitized line for assignments and flip the state of every
/// tracked left-hand identifier to initialized.
///
/// Non-identifier left-hand sides (`arr[i] =`, `*p =`) recover nothing and
/// are silently ignored; the table only tracks simple named scalars.
pub fn scan_assignments(
    sanitized: &str,
    line_num: usize,
    table: &mut VariableTable,
    trace: &dyn TraceSink,
) {
    let bytes = sanitized.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'=' {
            pos += 1;
            continue;
        }
        let eq = pos;
        pos += 1;

        let prev = eq.checked_sub(1).map(|i| bytes[i]);
        if matches!(prev, Some(b'=' | b'!' | b'<' | b'>')) || bytes.get(eq + 1) == Some(&b'=') {
            continue;
        }

        // Walk back over whitespace, then over identifier characters.
        let mut end = eq;
        while end > 0 && bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }
        let mut start = end;
        while start > 0 && is_ident_byte(bytes[start - 1]) {
            start -= 1;
        }

        // A `*` in front of the identifier means the target is a
        // dereference, not the named scalar itself.
        if start < end && start.checked_sub(1).map(|i| bytes[i]) != Some(b'*') {
            let name = &sanitized[start..end];
            if table.mark_initialized(name) {
                trace.event(&format!(
                    "line {}: '{}' initialized by assignment",
                    line_num, name
                ));
            }
        }
    }
}
