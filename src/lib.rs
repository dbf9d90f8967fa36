//! js-logs-remover - strip console logging calls from JavaScript/TypeScript sources
//!
//! Walks a directory tree, skipping `node_modules`, `.git`, `dist` and `build`,
//! and blanks every line of a `.js`, `.ts`, `.jsx` or `.tsx` file that contains
//! `console.<method>(` for one of the selected methods. Files are rewritten in
//! place; line numbers of the remaining code are preserved.
//!
//! ## Pipeline
//!
//! - [`MethodSet::resolve`] turns CLI arguments into the immutable method set
//! - [`walker::discover_source_files`] streams qualifying files into a bounded channel
//! - [`rewriter::rewrite_file`] applies the [`LineFilter`] to each file on a rayon worker
//! - [`runner::run`] wires it together and returns a [`RunSummary`]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod methods;
pub mod rewriter;
pub mod runner;
pub mod walker;

// Re-export commonly used items
pub use catalog::Catalog;
pub use error::StripError;
pub use filter::{Filtered, LineFilter};
pub use methods::{MethodSet, ALL_KEYWORD};
pub use rewriter::{rewrite_file, RewriteOutcome};
pub use runner::{run, RunOptions, RunSummary};
pub use walker::{discover_source_files, WalkItem};
