//! CLI entry point for dirmap

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirmap::{ColorMode, OutputConfig, WalkerConfig, logging, run};

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Print a directory as a connector-drawn tree, to the console or a file")]
#[command(version)]
struct Args {
    /// Directory to map (`~` is expanded)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Write the map to FILE instead of stdout (overwrites)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Deepest level whose contents are listed (0 = root's children only)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    let use_color = args.color.should_use_color();
    logging::init_logging(args.verbose, use_color);

    let walker_config = WalkerConfig::with_max_depth(args.level);
    let output_config = OutputConfig {
        output_file: args.output,
        use_color,
    };

    if let Err(e) = run(&args.path, &walker_config, &output_config) {
        if !e.is_invalid_root() {
            eprintln!("dirmap: {}", e);
        }
        process::exit(1);
    }
}
