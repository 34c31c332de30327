//! JSON batch loading
//!
//! Each entry goes through `ExperimentStore::add`, so a batch file can never
//! smuggle an invalid record into the store. Rejected entries are collected
//! and reported instead of aborting the load.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use lab_ledger::experiment::{ExperimentInput, ExperimentStore};

/// Entry of the batch file that failed validation.
#[derive(Debug)]
pub struct Rejected {
    /// 1-based position in the batch file
    pub entry: usize,
    pub name: String,
    pub error: lab_ledger::Error,
}

/// Parse `text` as a batch and add every valid entry to a fresh store.
pub fn load_str(text: &str) -> Result<(ExperimentStore, Vec<Rejected>)> {
    let inputs: Vec<ExperimentInput> =
        serde_json::from_str(text).context("batch must be a JSON array of experiments")?;

    let mut store = ExperimentStore::new();
    let mut rejected = Vec::new();

    for (i, input) in inputs.into_iter().enumerate() {
        let name = input.name.clone();
        if let Err(error) = store.add(input.name, &input.date, &input.category, input.results) {
            warn!(entry = i + 1, %name, %error, "batch entry skipped");
            rejected.push(Rejected {
                entry: i + 1,
                name,
                error,
            });
        }
    }

    info!(loaded = store.len(), rejected = rejected.len(), "batch loaded");
    Ok((store, rejected))
}

/// Read and load the batch file at `path`.
pub fn load_file(path: &Path) -> Result<(ExperimentStore, Vec<Rejected>)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    load_str(&text).with_context(|| format!("failed to load {}", path.display()))
}
