pub mod setup;

use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskpoints")]
#[command(about = "Aggregate task points by status and compute weighted percentages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .taskpoints.toml)
    #[arg(long, global = true, env = "TASKPOINTS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate a task collection and print the report
    Report {
        /// Task file (.json or .toml), `-` for JSON on stdin; the sample collection if omitted
        input: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run every stage on the current thread
        #[arg(long)]
        sequential: bool,

        /// Number of worker threads (0 = use config or all cores)
        #[arg(short = 'j', long, default_value = "0")]
        jobs: usize,

        /// Disable colors in terminal output
        #[arg(long)]
        plain: bool,

        /// Print per-stage timings to stderr
        #[arg(long)]
        timings: bool,
    },

    /// Print the built-in sample collection as JSON
    Sample,

    /// Write a default .taskpoints.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
