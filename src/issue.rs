use std::fmt;

/// A position in a scanned file: 1-based line, 0-based column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(file: &str, line: usize, col: usize) -> Self {
        Self {
            file: file.to_string(),
            line,
            col,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

/// One finding: a likely read of a variable before it was assigned.
///
/// Warnings are append-only during a file's scan and are collected in scan
/// order (line-ascending, column-ascending within a line). There is no
/// deduplication: every accepted occurrence stands on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub location: Location,
    pub variable: String,
}

impl Warning {
    pub fn new(file: &str, line: usize, col: usize, variable: &str) -> Self {
        Self {
            location: Location::new(file, line, col),
            variable: variable.to_string(),
        }
    }

    /// The fixed-format message body, without the location prefix.
    pub fn message(&self) -> String {
        format!("use of possibly uninitialized variable '{}'", self.variable)
    }
}
