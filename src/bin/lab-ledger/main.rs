//! lab-ledger CLI
//!
//! Thin front end over `lab_ledger::experiment::ExperimentStore`. Numbers
//! shown to and typed by the user start at 1; the store uses 0-based
//! positions.

use anyhow::{anyhow, Result};
use clap::Parser;

use lab_ledger::experiment::{Category, Experiment, ExperimentStore};

mod batch;
mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        "lab_ledger=debug"
    } else {
        "lab_ledger=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.parse()?)
                .add_directive("warn".parse()?),
        )
        .with_target(false)
        .init();

    let mut store = match &cli.input {
        Some(path) => {
            let (store, rejected) = batch::load_file(path)?;
            for entry in &rejected {
                eprintln!("Skipped entry #{} ({}): {}", entry.entry, entry.name, entry.error);
            }
            store
        }
        None => ExperimentStore::new(),
    };

    match cli.command {
        Commands::List => print_experiments(&store),
        Commands::Analyze { number } => {
            let index = to_index(number)?;
            match store.analyze(index) {
                Some(analysis) => {
                    println!("Analysis of experiment #{number}:");
                    println!("  Average: {:.2}", analysis.average);
                    println!("  Maximum: {:?}", analysis.maximum);
                    println!("  Minimum: {:?}", analysis.minimum);
                }
                None => println!("Experiment not found or without enough results"),
            }
        }
        Commands::Compare { numbers } => {
            let indices = numbers
                .into_iter()
                .map(to_index)
                .collect::<Result<Vec<_>>>()?;
            let comparison = store.compare(&indices)?;

            println!("Experiment comparison:");
            for entry in &comparison.entries {
                println!(
                    "  {}: average {:.2}, maximum {:?}, minimum {:?}",
                    entry.name,
                    entry.analysis.average,
                    entry.analysis.maximum,
                    entry.analysis.minimum
                );
            }
            match (&comparison.best, &comparison.worst) {
                (Some(best), Some(worst)) => {
                    println!("Best performance: {} (average: {:.2})", best.name, best.average);
                    println!("Worst performance: {} (average: {:.2})", worst.name, worst.average);
                }
                _ => println!("No experiments were compared"),
            }
        }
        Commands::Remove { number } => {
            let removed = store.remove(to_index(number)?)?;
            println!("Removed experiment '{}'", removed.name());
            print_experiments(&store);
        }
        Commands::Report { file } => {
            let written = store.write_report(&file)?;
            println!("Report written to {}", written.display());
        }
        Commands::Categories => {
            let labels: Vec<_> = Category::ALL.into_iter().map(Category::as_str).collect();
            println!("Available categories: {}", labels.join(", "));
        }
    }

    Ok(())
}

/// Convert a 1-based experiment number to a store position.
fn to_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("experiment numbers start at 1 (got {number})"))
}

fn print_experiments(store: &ExperimentStore) {
    if store.is_empty() {
        println!("No experiments to show");
        return;
    }

    for (i, experiment) in store.list().enumerate() {
        println!("{:>3}. {}", i + 1, describe(experiment));
    }
}

fn describe(experiment: &Experiment) -> String {
    let results: Vec<String> = experiment.results().iter().map(|r| format!("{r:?}")).collect();
    format!(
        "{} | {} | {} | {}",
        experiment.name(),
        experiment.date_text(),
        experiment.category(),
        results.join(", ")
    )
}
