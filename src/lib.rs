//! uninitck - heuristic detector for reads of uninitialized local variables
//!
//! uninitck is a CLI tool and library that flags likely reads of local
//! variables before they are assigned a value in C-family source files. It
//! works on raw text, line by line, with no parse tree and no control-flow
//! graph: a fast, approximate lint pass that trades soundness for speed and
//! accepts both false positives and false negatives.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, exit codes, run loop)
//! - `config`: Optional `.uninitckrc.json` configuration
//! - `sanitize`: Comment and string-literal stripping per line
//! - `scan`: The per-file pipeline (declarations, assignments, uses)
//! - `issue`: Warning and location types
//! - `reporter`: Diagnostic printing with source echo and caret
//! - `trace`: Injectable debug sink (no-op by default)
//! - `walk`: Expansion of path arguments into scannable files

pub mod cli;
pub mod config;
pub mod issue;
pub mod reporter;
pub mod sanitize;
pub mod scan;
pub mod trace;
pub mod walk;
