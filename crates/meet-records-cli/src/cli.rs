//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use meet_records::{Language, RecordLift};

#[derive(Parser)]
#[command(name = "meet-records")]
#[command(version, about = "Powerlifting meet records")]
pub struct Cli {
    /// Config file (default: <config dir>/meet-records/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Meet file (JSON)
    #[arg(short, long, global = true)]
    pub meet: Option<PathBuf>,

    /// Records CSV to use as the seed instead of the meet file's records
    #[arg(short, long, global = true)]
    pub records: Option<PathBuf>,

    /// Language code (en, es)
    #[arg(short, long, global = true, env = "MEET_RECORDS_LANGUAGE")]
    pub language: Option<Language>,

    /// Directory for generated files
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Recompute records from the meet's results and write them as CSV
    Recompute {
        /// Output file (default: <output dir>/records.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recompute records and write the printable records page
    Html {
        /// Output file (default: <output dir>/records.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a records CSV against the meet's divisions
    Import {
        /// Records CSV to check
        file: PathBuf,
    },

    /// Check whether a pending attempt would set a record
    Attempt {
        /// Entry id
        #[arg(long)]
        entry: u32,

        /// S, B, D or Total
        #[arg(long)]
        lift: RecordLift,

        /// Attempt number
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        attempt: u8,
    },

    /// Write an example records CSV
    Example {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print recomputed records by category
    List,
}
