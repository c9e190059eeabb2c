//! One-call entry point: walk, report, deliver

use std::path::Path;

use crate::error::MapError;
use crate::output::{Console, Delivery, OutputConfig, deliver};
use crate::tree::{DirectoryWalker, WalkerConfig};

/// Walk `root` and deliver the map.
///
/// An invalid root is reported on the console before the error is
/// returned; nothing is printed to stdout in that case.
pub fn run(
    root: &Path,
    walker_config: &WalkerConfig,
    output_config: &OutputConfig,
) -> Result<Delivery, MapError> {
    let walker = DirectoryWalker::new(walker_config.clone());
    let map = match walker.walk(root) {
        Ok(map) => map,
        Err(err) => {
            Console::new(output_config.use_color).error(&format!("Error: {}", err))?;
            return Err(err);
        }
    };
    deliver(&map, output_config)
}

/// Map `start_path` to `output_file` (or stdout), descending at most
/// `max_depth` levels below the root's children. Status lines are colored
/// only when stderr is a terminal and `NO_COLOR` is unset.
pub fn generate_directory_map(
    start_path: impl AsRef<Path>,
    output_file: Option<&Path>,
    max_depth: Option<usize>,
) -> Result<Delivery, MapError> {
    let output_config = output_file.map(OutputConfig::to_file).unwrap_or_default();
    run(
        start_path.as_ref(),
        &WalkerConfig::with_max_depth(max_depth),
        &output_config,
    )
}
