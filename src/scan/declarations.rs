//! Declaration recognition and declarator extraction.
//!
//! A line is a declaration when its trimmed form starts with one of a fixed
//! set of primitive-type keywords followed by whitespace. This is a literal
//! prefix test: qualifiers before the keyword (`static`, `const`, pointer
//! stars) make the line unrecognizable as a declaration, an accepted
//! limitation of the line-local model.

use crate::issue::Location;
use crate::scan::table::VariableTable;
use crate::trace::TraceSink;

/// Built-in declaration keywords. The config file may append to these.
pub const TYPE_KEYWORDS: &[&str] = &["int", "float", "double", "char", "bool", "long", "short"];

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// If the sanitized line is a declaration, register its declarators in the
/// table and return `Some(any_init)`, where `any_init` says whether any
/// declarator on the line carried an initializer. Returns `None` for
/// non-declaration lines.
///
/// Callers use `any_init` to decide whether the line's initializer
/// expressions should still be scanned for uses of other variables
/// (`int y = x + 1;` must detect the read of `x`), while an
/// initializer-less declaration like `int x;` is not use-scanned at all so
/// the declarator itself is never mistaken for a read.
pub fn scan_declaration(
    sanitized: &str,
    file: &str,
    line_num: usize,
    keywords: &[String],
    table: &mut VariableTable,
    trace: &dyn TraceSink,
) -> Option<bool> {
    let indent = sanitized.len() - sanitized.trim_start().len();
    let trimmed = &sanitized[indent..];

    let keyword = keywords.iter().find(|kw| {
        trimmed.starts_with(kw.as_str())
            && trimmed[kw.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_whitespace())
    })?;

    let rest_offset = indent + keyword.len();
    let rest = &sanitized[rest_offset..];
    Some(extract_declarators(
        rest,
        rest_offset,
        file,
        line_num,
        table,
        trace,
    ))
}

/// Walk the comma-separated declarator list after the type keyword.
///
/// Each declarator contributes its leading identifier. The character after
/// the identifier (past whitespace) decides its fate: `=` or `(` means an
/// initializer, `[` means an array declarator which is not a simple scalar
/// and is not tracked at all, anything else means uninitialized.
fn extract_declarators(
    rest: &str,
    rest_offset: usize,
    file: &str,
    line_num: usize,
    table: &mut VariableTable,
    trace: &dyn TraceSink,
) -> bool {
    let bytes = rest.as_bytes();
    let mut pos = 0;
    let mut any_init = false;

    while pos < bytes.len() {
        if is_ident_start(bytes[pos]) {
            let start = pos;
            while pos < bytes.len() && is_ident_continue(bytes[pos]) {
                pos += 1;
            }
            let name = &rest[start..pos];

            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }

            match bytes.get(pos) {
                Some(b'[') => {
                    trace.event(&format!(
                        "{}:{}: skipping array declarator '{}'",
                        file, line_num, name
                    ));
                }
                next => {
                    let init = matches!(next, Some(b'=') | Some(b'('));
                    any_init |= init;
                    let decl = Location::new(file, line_num, rest_offset + start);
                    trace.event(&format!(
                        "{}: declared '{}' ({})",
                        decl,
                        name,
                        if init { "initialized" } else { "uninitialized" }
                    ));
                    table.declare(name, decl, init);
                }
            }

            // Initializer expressions are skipped here; the use scanner
            // picks up any reads inside them.
            while pos < bytes.len() && bytes[pos] != b',' && bytes[pos] != b';' {
                pos += 1;
            }
            if pos < bytes.len() {
                pos += 1;
            }
        } else {
            pos += 1;
        }
    }

    any_init
}
