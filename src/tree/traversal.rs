//! Directory listing and the connector/prefix rules of the tree layout.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

/// Connector for an entry with later siblings.
pub const BRANCH: &str = "├── ";
/// Connector for the final entry at its level.
pub const LAST_BRANCH: &str = "└── ";
/// Prefix segment beneath an entry that has later siblings.
pub const PIPE: &str = "│   ";
/// Prefix segment beneath the final entry at its level.
pub const BLANK: &str = "    ";

/// Children of one directory, partitioned and sorted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Listing {
    pub dirs: Vec<OsString>,
    pub files: Vec<OsString>,
}

/// One entry of a `Listing` in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedEntry<'a> {
    pub name: &'a OsStr,
    pub is_dir: bool,
    pub is_last: bool,
}

impl Listing {
    /// Read the immediate children of `path`.
    ///
    /// Symlinks are followed when classifying, so a link to a directory is a
    /// directory and a dangling link is a file.
    pub fn read(path: &Path) -> io::Result<Self> {
        let mut listing = Listing::default();
        for entry in readable_entries(fs::read_dir(path)?, path) {
            let name = entry.file_name();
            if entry.path().is_dir() {
                listing.dirs.push(name);
            } else {
                listing.files.push(name);
            }
        }
        listing.sort();
        Ok(listing)
    }

    /// Build a listing from names already classified by the caller.
    pub fn from_names<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<OsString>,
        F: IntoIterator,
        F::Item: Into<OsString>,
    {
        let mut listing = Listing {
            dirs: dirs.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        };
        listing.sort();
        listing
    }

    fn sort(&mut self) {
        self.dirs.sort();
        self.files.sort();
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    /// Directories first, then files, each flagged with whether it is the
    /// last line emitted at this level.
    pub fn entries(&self) -> impl Iterator<Item = ListedEntry<'_>> {
        let dir_count = self.dirs.len();
        let file_count = self.files.len();
        let no_files = file_count == 0;

        let dirs = self.dirs.iter().enumerate().map(move |(i, name)| ListedEntry {
            name,
            is_dir: true,
            is_last: i + 1 == dir_count && no_files,
        });
        let files = self.files.iter().enumerate().map(move |(i, name)| ListedEntry {
            name,
            is_dir: false,
            is_last: i + 1 == file_count,
        });
        dirs.chain(files)
    }
}

/// Yield the entries that could be read, logging each one that could not.
fn readable_entries<T, I>(entries: I, dir: &Path) -> impl Iterator<Item = T>
where
    I: Iterator<Item = io::Result<T>>,
{
    entries.filter_map(move |entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "skipping unreadable entry");
            None
        }
    })
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for child entries
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, BLANK)
    } else {
        format!("{}{}", current_prefix, PIPE)
    }
}

/// Format a single tree line. Directory names get a trailing `/`.
pub fn entry_line(prefix: &str, entry: &ListedEntry<'_>) -> String {
    let marker = if entry.is_dir { "/" } else { "" };
    format!(
        "{}{}{}{}",
        prefix,
        connector(entry.is_last),
        entry.name.to_string_lossy(),
        marker
    )
}
