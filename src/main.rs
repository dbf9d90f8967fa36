use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use humansize::{format_size, BINARY};
use js_logs_remover::runner::DEFAULT_QUEUE_CAPACITY;
use js_logs_remover::{run, Catalog, MethodSet, RunOptions, RunSummary};
use std::path::PathBuf;

const USAGE: &str = "Usage: js-logs-remover [path] [log-methods]";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remove console.* calls from JavaScript and TypeScript files in place",
    long_about = None
)]
struct Args {
    /// Directory to scan (an empty string means the current directory)
    path: Option<String>,

    /// Methods to remove: `all`, or comma-separated names such as `log,warn`
    methods: Vec<String>,

    /// Show skipped directories and per-file line counts
    #[arg(long, short)]
    verbose: bool,

    /// Number of worker threads (defaults to one per CPU)
    #[arg(long, short)]
    jobs: Option<usize>,
}

fn print_summary(summary: &RunSummary) {
    println!("{}", "✅ All selected console methods removed!".green());
    println!(
        "Files rewritten: {}, failed: {}, unreadable directories: {}, lines removed: {}, written: {}",
        summary.files_processed,
        summary.files_failed,
        summary.dir_errors,
        summary.lines_removed,
        format_size(summary.bytes_written, BINARY)
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(path) = args.path else {
        println!("{}", USAGE);
        return Ok(());
    };

    let root = if path.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(path)
    };

    let catalog = Catalog::load().context("Failed to load console method catalog")?;
    let methods = MethodSet::resolve(&args.methods, &catalog);

    let options = RunOptions {
        verbose: args.verbose,
        jobs: args.jobs,
        queue_capacity: DEFAULT_QUEUE_CAPACITY,
    };

    let summary = run(&root, &methods, &catalog, options)?;
    print_summary(&summary);

    Ok(())
}
