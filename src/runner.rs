//! Walk-and-rewrite pipeline.

use crate::catalog::Catalog;
use crate::error::StripError;
use crate::filter::LineFilter;
use crate::methods::MethodSet;
use crate::rewriter::{rewrite_file, RewriteOutcome};
use crate::walker::{discover_source_files, WalkItem};

use anyhow::{Context, Result};
use colored::Colorize;
use crossbeam_channel::bounded;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::thread;

pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Options controlling a run (runtime flags)
#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    pub verbose: bool,
    /// Worker threads; `None` uses the global rayon pool
    pub jobs: Option<usize>,
    /// Paths buffered between the walker and the workers
    pub queue_capacity: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            verbose: false,
            jobs: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Totals over a whole run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub dir_errors: usize,
    pub lines_removed: usize,
    pub bytes_written: u64,
}

impl RunSummary {
    fn record(&mut self, result: &Result<RewriteOutcome, StripError>) {
        match result {
            Ok(outcome) => {
                self.files_processed += 1;
                self.lines_removed += outcome.lines_removed;
                self.bytes_written += outcome.bytes_written;
            }
            Err(_) => self.files_failed += 1,
        }
    }

    fn merge(mut self, other: RunSummary) -> RunSummary {
        self.files_processed += other.files_processed;
        self.files_failed += other.files_failed;
        self.dir_errors += other.dir_errors;
        self.lines_removed += other.lines_removed;
        self.bytes_written += other.bytes_written;
        self
    }
}

fn report_rewrite(result: &Result<RewriteOutcome, StripError>, verbose: bool) {
    match result {
        Ok(outcome) => {
            if verbose {
                println!(
                    "{}",
                    format!(
                        "Processed: {} ({} lines removed)",
                        outcome.path.display(),
                        outcome.lines_removed
                    )
                    .green()
                );
            } else {
                println!(
                    "{}",
                    format!("Processed: {}", outcome.path.display()).green()
                );
            }
        }
        Err(err) => {
            eprintln!("{}", format!("Error processing file: {}", err).red());
        }
    }
}

/// Handle one walk event on a worker thread
fn process_item(item: WalkItem, filter: &LineFilter, verbose: bool) -> RunSummary {
    let mut summary = RunSummary::default();
    match item {
        WalkItem::File(path) => {
            let result = rewrite_file(&path, filter);
            report_rewrite(&result, verbose);
            summary.record(&result);
        }
        WalkItem::Skipped(path) => {
            if verbose {
                println!(
                    "{}",
                    format!("Skipping excluded directory: {}", path.display()).dimmed()
                );
            }
        }
        WalkItem::Error(err) => {
            eprintln!("{}", format!("Error reading directory: {}", err).red());
            summary.dir_errors += 1;
        }
    }
    summary
}

fn run_pipeline(
    root: PathBuf,
    filter: &LineFilter,
    catalog: &Catalog,
    options: RunOptions,
) -> Result<RunSummary> {
    // Bounded so that the walk cannot run arbitrarily far ahead of the rewrites
    let (sender, receiver) = bounded::<WalkItem>(options.queue_capacity.max(1));

    let walk_catalog = catalog.clone();
    let producer_handle = thread::spawn(move || {
        discover_source_files(&root, &walk_catalog, sender);
    });

    let summary = receiver
        .into_iter()
        .par_bridge()
        .map(|item| process_item(item, filter, options.verbose))
        .reduce(RunSummary::default, RunSummary::merge);

    producer_handle
        .join()
        .map_err(|_| anyhow::anyhow!("Directory walker thread panicked"))?;

    Ok(summary)
}

/// Rewrite every qualifying file under `root`, blocking until all rewrites finish.
///
/// Per-file and per-directory failures are printed and counted; they never abort
/// the run. Only setup failures (thread pool, walker panic) are returned as errors.
pub fn run(
    root: &Path,
    methods: &MethodSet,
    catalog: &Catalog,
    options: RunOptions,
) -> Result<RunSummary> {
    let filter = LineFilter::new(methods);

    if options.verbose {
        println!(
            "{}",
            format!("DEBUG: Scanning directory {}", root.display()).dimmed()
        );
        let selected: Vec<&str> = methods.iter().collect();
        println!(
            "{}",
            format!("DEBUG: Selected methods: [{}]", selected.join(", ")).dimmed()
        );
        for unknown in methods.unknown(catalog) {
            eprintln!(
                "{}",
                format!("Warning: '{}' is not a known console method", unknown).yellow()
            );
        }
    }

    match options.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("Failed to build worker thread pool")?;
            pool.install(|| run_pipeline(root.to_path_buf(), &filter, catalog, options))
        }
        None => run_pipeline(root.to_path_buf(), &filter, catalog, options),
    }
}
