//! Command-line front-end

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod confirm;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "skillmap", version, about = "Load, edit and export skillmap JSON documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Machine-readable JSON output and errors
    #[arg(long, global = true, env = "SKILLMAP_ROBOT")]
    pub robot: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

impl Cli {
    /// Format requested on the command line, if any. `--robot` implies JSON.
    pub const fn output_format(&self) -> Option<OutputFormat> {
        if self.robot {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }
}
