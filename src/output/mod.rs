//! Output of a rendered directory map
//!
//! - `config` - Output configuration types
//! - `console` - Coloured status lines on stderr
//! - `sink` - File writing with stdout fallback

mod config;
mod console;
mod sink;

pub use config::{ColorMode, OutputConfig};
pub use console::Console;
pub use sink::{Delivery, deliver, print_map, write_map_file};
