use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Cutting jobs in JSON format, each one is packed independently
    #[arg(short, long, value_name = "FILE", num_args = 1.., required_unless_present = "interactive")]
    pub input_file: Vec<PathBuf>,
    /// Read the stock size, the parts and a finish keyword from stdin, one per line
    #[arg(long, conflicts_with = "input_file")]
    pub interactive: bool,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
