//! DirectoryWalker - resolves the root and renders the tree depth-first

use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::{debug, warn};

use crate::error::MapError;

use super::config::WalkerConfig;
use super::map::DirectoryMap;
use super::traversal::{Listing, child_prefix, entry_line};

/// Walks a directory tree and collects one display line per entry.
pub struct DirectoryWalker {
    config: WalkerConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Resolve `root` and render everything beneath it.
    ///
    /// Fails only when the root is missing or is not a directory. Problems
    /// reading subdirectories become marker lines in the map.
    pub fn walk(&self, root: &Path) -> Result<DirectoryMap, MapError> {
        let root = resolve_root(root)?;
        debug!(root = %root.display(), max_depth = ?self.config.max_depth, "walking");

        let mut lines = Vec::new();
        let mut ancestors = Vec::new();
        self.walk_dir(&root, "", 0, &mut ancestors, &mut lines);

        Ok(DirectoryMap::new(root, lines))
    }

    fn walk_dir(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        out: &mut Vec<String>,
    ) {
        if self.config.beyond_max_depth(depth) {
            return;
        }

        // A symlink back to a directory already on the current path would
        // never terminate.
        let canonical = dunce::canonicalize(dir).ok();
        if let Some(ref real) = canonical
            && ancestors.contains(real)
        {
            warn!(path = %dir.display(), target = %real.display(), "symlink loop, not descending");
            out.push(format!("{}[Symlink loop: {}]", prefix, dir_name(dir)));
            return;
        }

        let listing = match Listing::read(dir) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "cannot read directory");
                out.push(marker_line(prefix, dir, &e));
                return;
            }
        };
        debug!(
            path = %dir.display(),
            dirs = listing.dirs.len(),
            files = listing.files.len(),
            "listed"
        );

        let pushed = match canonical {
            Some(real) => {
                ancestors.push(real);
                true
            }
            None => false,
        };

        for entry in listing.entries() {
            out.push(entry_line(prefix, &entry));
            if entry.is_dir {
                let next_prefix = child_prefix(prefix, entry.is_last);
                self.walk_dir(&dir.join(entry.name), &next_prefix, depth + 1, ancestors, out);
            }
        }

        if pushed {
            ancestors.pop();
        }
    }
}

/// Expand `~`, then resolve to an absolute path with symlinks followed.
pub fn resolve_root(path: &Path) -> Result<PathBuf, MapError> {
    // Collecting components drops a trailing separator, so `file.txt/`
    // resolves to the file rather than failing with ENOTDIR.
    let expanded: PathBuf = expand_home(path).components().collect();
    let resolved = match dunce::canonicalize(&expanded) {
        Ok(p) => p,
        Err(e) => {
            debug!(path = %expanded.display(), error = %e, "cannot resolve root");
            let shown = std::path::absolute(&expanded).unwrap_or(expanded);
            return Err(MapError::NotFound(shown));
        }
    };

    if !resolved.is_dir() {
        return Err(MapError::NotADirectory(resolved));
    }
    Ok(resolved)
}

/// Replace a leading `~` component with the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match BaseDirs::new() {
            Some(dirs) if rest.as_os_str().is_empty() => dirs.home_dir().to_path_buf(),
            Some(dirs) => dirs.home_dir().join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// The line standing in for a directory's children when it cannot be listed.
pub fn marker_line(prefix: &str, dir: &Path, error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::PermissionDenied => {
            format!("{}[Permission denied: {}]", prefix, dir_name(dir))
        }
        _ => format!("{}[Unreadable: {}]", prefix, dir_name(dir)),
    }
}

/// Get the name of a path, falling back to the full path for roots like `/`
fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
