//! The rendered result of a walk

use std::fmt;
use std::path::{Path, PathBuf};

/// Width of the `=` rule under the header.
pub const RULE_WIDTH: usize = 50;

/// A directory tree flattened into display lines, plus the root it was
/// taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryMap {
    root: PathBuf,
    lines: Vec<String>,
}

impl DirectoryMap {
    pub fn new(root: PathBuf, lines: Vec<String>) -> Self {
        Self { root, lines }
    }

    /// The resolved root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Tree lines below the header, in walk order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn header(&self) -> [String; 2] {
        [
            format!("Directory Map of: {}", self.root.display()),
            "=".repeat(RULE_WIDTH),
        ]
    }

    /// Join header and tree lines with newlines. No trailing newline.
    pub fn render(&self) -> String {
        self.header()
            .into_iter()
            .chain(self.lines.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for DirectoryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
