//! Directory tree walking logic
//!
//! `DirectoryWalker` resolves a root path and walks it depth-first,
//! producing a `DirectoryMap`: a header plus one connector-drawn line per
//! entry, directories before files at each level.

mod config;
mod map;
mod traversal;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use map::{DirectoryMap, RULE_WIDTH};
pub use traversal::{
    BLANK, BRANCH, LAST_BRANCH, ListedEntry, Listing, PIPE, child_prefix, connector, entry_line,
};
pub use walker::{DirectoryWalker, expand_home, marker_line, resolve_root};
