//! Expansion of command-line paths into the list of files to scan.
//!
//! Files named explicitly are scanned as-is, whether or not they exist or
//! match the configured extensions: a missing file must still flow through
//! the scanner so its open failure is reported the usual way. Directory
//! arguments are walked recursively, keeping files with a configured
//! extension and dropping anything matching an ignore glob.

use anyhow::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;

pub fn collect_files(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let ignores: Vec<Pattern> = config
        .ignores
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<Result<_, _>>()?;

    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_dir(path, config, &ignores, &mut files);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn collect_dir(dir: &Path, config: &Config, ignores: &[Pattern], files: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok());

    for entry in walker {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_scanned_extension(path, config) {
            continue;
        }
        if ignores.iter().any(|pattern| pattern.matches_path(path)) {
            continue;
        }
        files.push(path.to_path_buf());
    }
}

fn has_scanned_extension(path: &Path, config: &Config) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.extensions.iter().any(|e| e == ext))
}
