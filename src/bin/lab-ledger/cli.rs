//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// lab-ledger CLI
///
/// Loads experiments from a JSON batch file, validating each one, then
/// lists, analyzes, compares or reports on them.
#[derive(Parser, Debug)]
#[command(name = "lab-ledger")]
#[command(version)]
#[command(about = "Scientific experiment ledger", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file holding an array of {name, date, category, results}
    #[arg(short, long, global = true, env = "LAB_LEDGER_INPUT")]
    pub input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every loaded experiment
    #[command(alias = "ls")]
    List,

    /// Average, maximum and minimum of one experiment
    Analyze {
        /// Experiment number (starting at 1)
        number: usize,
    },

    /// Compare experiments by average
    #[command(alias = "cmp")]
    Compare {
        /// Experiment numbers, comma-separated (starting at 1)
        #[arg(value_delimiter = ',', required = true)]
        numbers: Vec<usize>,
    },

    /// Remove one experiment and show what remains
    #[command(alias = "rm")]
    Remove {
        /// Experiment number (starting at 1)
        number: usize,
    },

    /// Write the text report (".txt" is appended when missing)
    Report {
        /// Report file name
        file: PathBuf,
    },

    /// Show the accepted experiment categories
    Categories,
}
