//! Line sanitization: strips comments and string-literal payloads so the
//! downstream scanners can do naive substring and word matching without
//! text inside comments or strings masquerading as code.
//!
//! Sanitization is strictly line-local. A block comment that is not closed
//! on the same line simply swallows the rest of that line; there is no
//! cross-line comment state.

/// Sanitize one raw source line.
///
/// The result is equal or shorter in length and contains no comment text
/// and no string-literal characters (the quote delimiters are dropped
/// along with their payload).
///
/// Rules:
/// - A line containing a fenced-code marker (three backticks) sanitizes to
///   the empty string, so embedded documentation blocks are never scanned.
/// - `/*` drops everything up to the matching `*/` on the same line, or to
///   end of line when unterminated.
/// - `//` and `#` truncate the line at the marker.
/// - `"` opens a string literal; a backslash consumes the following
///   character as one unit, so escaped quotes do not close the literal.
///   An unterminated literal consumes the rest of the line.
pub fn sanitize_line(raw: &str) -> String {
    if raw.contains("```") {
        return String::new();
    }

    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '/' && chars.get(i + 1) == Some(&'*') {
            let mut j = i + 2;
            let mut closed = false;
            while j + 1 < chars.len() {
                if chars[j] == '*' && chars[j + 1] == '/' {
                    closed = true;
                    break;
                }
                j += 1;
            }
            if !closed {
                break;
            }
            i = j + 2;
        } else if c == '/' && chars.get(i + 1) == Some(&'/') {
            break;
        } else if c == '#' {
            break;
        } else if c == '"' {
            i += 1;
            while i < chars.len() {
                match chars[i] {
                    '\\' => i += 2,
                    '"' => {
                        i += 1;
                        break;
                    }
                    _ => i += 1,
                }
            }
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}
