//! CLI argument definitions using clap's derive API.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source files or directories to scan. Directories are expanded
    /// recursively to files with C-family extensions.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Report every non-assignment occurrence of an uninitialized
    /// variable instead of suppressing address-of, subscript, call and
    /// member-access contexts
    #[arg(long)]
    pub noisy: bool,

    /// Path to the configuration file (default: .uninitckrc.json in the
    /// working directory)
    #[arg(long, env = "UNINITCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable scanner trace output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
