//! Output configuration types

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::ValueEnum;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Decide whether to color status lines. They go to stderr, so that is
    /// the stream checked for a terminal.
    pub fn should_use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // https://no-color.org/
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                if std::env::var_os("FORCE_COLOR").is_some() {
                    return true;
                }
                if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                    return false;
                }
                std::io::stderr().is_terminal()
            }
        }
    }
}

/// Where the rendered map goes and how status lines look.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Destination file. `None` prints to stdout.
    pub output_file: Option<PathBuf>,
    pub use_color: bool,
}

impl OutputConfig {
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            output_file: Some(path.into()),
            ..Default::default()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_file: None,
            use_color: ColorMode::Auto.should_use_color(),
        }
    }
}
