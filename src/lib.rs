//! dirmap - print a directory as a connector-drawn tree

pub mod error;
pub mod generate;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::MapError;
pub use generate::{generate_directory_map, run};
pub use output::{ColorMode, Delivery, OutputConfig, deliver};
pub use tree::{DirectoryMap, DirectoryWalker, WalkerConfig};
