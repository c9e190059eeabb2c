//! Delivering a rendered map to a file or stdout

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::MapError;
use crate::tree::DirectoryMap;

use super::config::OutputConfig;
use super::console::Console;

/// What happened to the rendered map.
#[derive(Debug)]
pub enum Delivery {
    /// Printed to stdout because no output file was configured.
    Printed,
    /// Written to the output file.
    Saved(PathBuf),
    /// The output file could not be written, so the map went to stdout.
    FellBack { path: PathBuf, error: MapError },
}

/// Send `map` where `config` says. A failed file write is reported and
/// falls back to stdout; only a failure to write the console itself is an
/// error.
pub fn deliver(map: &DirectoryMap, config: &OutputConfig) -> Result<Delivery, MapError> {
    let text = map.render();

    let Some(path) = &config.output_file else {
        print_map(&text)?;
        return Ok(Delivery::Printed);
    };

    let mut console = Console::new(config.use_color);
    match write_map_file(&text, path) {
        Ok(()) => {
            info!(path = %path.display(), bytes = text.len(), "map saved");
            console.success(&format!("Directory map saved to: {}", path.display()))?;
            Ok(Delivery::Saved(path.clone()))
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "falling back to stdout");
            console.error(&format!("Error writing to file: {}", error))?;
            console.warning("Printing to console instead:")?;
            print_map(&text)?;
            Ok(Delivery::FellBack {
                path: path.clone(),
                error,
            })
        }
    }
}

/// Write `text` to `path`, replacing any existing content.
pub fn write_map_file(text: &str, path: &Path) -> Result<(), MapError> {
    let wrap = |source: io::Error| MapError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;
    Ok(())
}

/// Print `text` followed by a newline to stdout.
pub fn print_map(text: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;
    writeln!(handle)?;
    handle.flush()
}
