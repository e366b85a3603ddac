//! Command-line argument parsing
//!
//! Supports:
//! - Choosing which views to write (sorted, reversed, original)
//! - Input and output paths
//! - Overriding config file values

use clap::Parser;
use onegin_config::Config;
use onegin_engine::{ByteOrder, ViewSelection};
use std::path::PathBuf;

/// Sort the lines of a UTF-16 text file
#[derive(Parser, Debug)]
#[command(name = "onegin", version, about = "Sort the lines of a UTF-16 text file")]
pub struct CliArgs {
    /// UTF-16 file to read
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the lines in their original order
    #[arg(short = 'o', long)]
    pub original: bool,

    /// Write the lines sorted front to back
    #[arg(short = 's', long)]
    pub sorted: bool,

    /// Write the lines sorted back to front
    #[arg(short = 'r', long = "rev")]
    pub reversed: bool,

    /// File to write the views to
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read and write big-endian code units
    #[arg(long)]
    pub big_endian: bool,

    /// Do not write the byte-order marker before each view
    #[arg(long)]
    pub no_header: bool,
}

/// Everything a run needs, after flags are merged over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub byte_order: ByteOrder,
    pub views: ViewSelection,
    pub write_header: bool,
}

impl CliArgs {
    /// Merge parsed flags over `config`. Flags win whenever they are given.
    pub fn into_settings(self, config: Config) -> RunSettings {
        let flagged = ViewSelection {
            sorted: self.sorted,
            reversed: self.reversed,
            original: self.original,
        };
        let views = if flagged.is_empty() {
            config.views
        } else {
            flagged
        };

        let byte_order = if self.big_endian {
            ByteOrder::Big
        } else {
            config.byte_order
        };

        RunSettings {
            input: self.input,
            output: self.output.unwrap_or(config.output_path),
            byte_order,
            views,
            write_header: config.write_header && !self.no_header,
        }
    }
}
