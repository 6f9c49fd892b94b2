use anyhow::Result;
use rayon::prelude::*;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::config::Config;
use crate::reporter;
use crate::scan::{self, FileReport, Mode};
use crate::trace::{NullSink, StderrSink, TraceSink};
use crate::walk::collect_files;

/// Run a full scan: load config, expand paths, scan every file, print the
/// reports in input order.
///
/// Files are scanned in parallel; each gets its own variable table and
/// warning buffer, so the only cross-file coordination is collecting the
/// finished reports. Printing stays sequential and ordered so the output
/// is deterministic regardless of scheduling.
pub fn run(args: &Arguments) -> Result<ExitStatus> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mode = if args.noisy || config.noisy {
        Mode::Noisy
    } else {
        Mode::Conservative
    };

    let null_sink = NullSink;
    let stderr_sink = StderrSink;
    let trace: &dyn TraceSink = if args.verbose {
        &stderr_sink
    } else {
        &null_sink
    };

    let files = collect_files(&args.paths, &config)?;

    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| scan::scan_file(path, mode, &config.type_keywords, trace))
        .collect();

    let mut total_warnings = 0;
    for report in &reports {
        reporter::print_report(report);
        total_warnings += report.warnings.len();
    }

    Ok(ExitStatus::from_warning_count(total_warnings))
}
