//! Directory traversal that streams qualifying source files.

use crate::catalog::Catalog;
use crate::error::StripError;

use crossbeam_channel::Sender;
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One event produced by the walk
#[derive(Debug)]
pub enum WalkItem {
    /// Regular file with a recognized source extension
    File(PathBuf),
    /// Excluded directory that was not descended into
    Skipped(PathBuf),
    /// Entry or directory that could not be listed
    Error(StripError),
}

/// Whether the walk should enter this entry. The root is always entered.
pub fn should_descend(entry: &DirEntry, catalog: &Catalog) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !catalog.is_excluded_dir(&name)
}

/// Walk `root` depth-first and send every qualifying file to `sender`.
///
/// Only the fixed exclusion list prunes the tree: hidden entries and ignore files
/// are not consulted. Links are never followed, so a symlinked directory is not
/// entered and a symlinked file is not a regular file.
///
/// A root that exists but is not a directory is reported as a listing error
/// and nothing under it is rewritten.
pub fn discover_source_files(root: &Path, catalog: &Catalog, sender: Sender<WalkItem>) {
    if let Ok(metadata) = fs::metadata(root) {
        if !metadata.is_dir() {
            let err = ignore::Error::WithPath {
                path: root.to_path_buf(),
                err: Box::new(ignore::Error::Io(io::Error::new(
                    io::ErrorKind::Other,
                    "not a directory",
                ))),
            };
            sender.send(WalkItem::Error(StripError::DirectoryList(err))).ok();
            return;
        }
    }

    let filter_catalog = catalog.clone();
    let skipped_sender = sender.clone();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            let descend = should_descend(entry, &filter_catalog);
            if !descend {
                skipped_sender
                    .send(WalkItem::Skipped(entry.path().to_path_buf()))
                    .ok();
            }
            descend
        })
        .build();

    for result in walker {
        let item = match result {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                if !is_file || !catalog.is_source_file(entry.path()) {
                    continue;
                }
                WalkItem::File(entry.into_path())
            }
            Err(err) => WalkItem::Error(StripError::DirectoryList(err)),
        };

        if sender.send(item).is_err() {
            // Receiver dropped, stop walking
            break;
        }
    }
}
