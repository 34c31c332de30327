//! Experiment Store - ordered in-memory collection of experiments
//!
//! Positions are 0-based and contiguous. Removing position `k` shifts every
//! later experiment down by one, so a position is not a stable identifier.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{report, Analysis, Comparison, ComparisonEntry, Experiment};
use crate::error::{Error, Result, ValidationError};

/// In-memory store for experiments.
///
/// ## Design
///
/// A single `Vec` keeps insertion order. Every experiment in it passed
/// validation in [`Experiment::new`]; a failed [`add`](Self::add) never
/// touches the collection.
#[derive(Debug, Default)]
pub struct ExperimentStore {
    experiments: Vec<Experiment>,
}

impl ExperimentStore {
    /// Create a new empty experiment store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Get the number of experiments in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Get the experiment at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Experiment> {
        self.experiments.get(index)
    }

    /// Validate and append a new experiment.
    ///
    /// Returns the position of the new experiment (always the last one).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when fewer than three results are given,
    /// the date is not `DD/MM/YYYY`, the category is unknown or the name is
    /// blank. The store is unchanged on error.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        date_text: &str,
        category: &str,
        results: Vec<f64>,
    ) -> Result<usize> {
        let experiment = Experiment::new(name, date_text, category, results).map_err(|e| {
            warn!(reason = %e, "experiment rejected");
            e
        })?;

        let index = self.experiments.len();
        debug!(index, name = experiment.name(), "experiment added");
        self.experiments.push(experiment);
        Ok(index)
    }

    /// Remove and return the experiment at `index`, compacting later positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len()`.
    pub fn remove(&mut self, index: usize) -> Result<Experiment> {
        let len = self.experiments.len();
        if index >= len {
            warn!(index, len, "remove out of range");
            return Err(Error::IndexOutOfRange { index, len });
        }

        let removed = self.experiments.remove(index);
        debug!(index, name = removed.name(), "experiment removed");
        Ok(removed)
    }

    /// Iterate over all experiments in store order.
    ///
    /// Each call starts a fresh pass. `&ExperimentStore` also implements
    /// `IntoIterator` with the same iterator type.
    pub fn list(&self) -> std::slice::Iter<'_, Experiment> {
        self.experiments.iter()
    }

    /// Average, maximum and minimum of the experiment at `index`.
    ///
    /// `None` means "not found": either `index` is out of range or the
    /// experiment carries fewer than three results. The second case cannot
    /// happen for experiments admitted through [`add`](Self::add).
    #[must_use]
    pub fn analyze(&self, index: usize) -> Option<Analysis> {
        self.experiments
            .get(index)
            .and_then(|experiment| Analysis::from_results(experiment.results()))
    }

    /// Compare the experiments at `indices`, in the given order.
    ///
    /// Duplicates are allowed. An empty `indices` yields an empty
    /// [`Comparison`] whose best and worst are `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIndices`] if any index is out of
    /// range; no partial comparison is produced.
    pub fn compare(&self, indices: &[usize]) -> Result<Comparison> {
        let len = self.experiments.len();
        if indices.iter().any(|&index| index >= len) {
            warn!(?indices, len, "comparison rejected");
            return Err(ValidationError::InvalidIndices {
                indices: indices.to_vec(),
                len,
            }
            .into());
        }

        let mut comparison = Comparison::default();
        for &index in indices {
            let Some(analysis) = self.analyze(index) else {
                continue;
            };
            comparison.push(ComparisonEntry {
                index,
                name: self.experiments[index].name().to_string(),
                analysis,
            });
        }

        Ok(comparison)
    }

    /// Render the text report for every experiment in store order.
    #[must_use]
    pub fn generate_report(&self) -> String {
        report::render_report(self)
    }

    /// Write the text report to `path`, appending `.txt` when missing.
    ///
    /// Returns the path actually written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_report(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        report::write_report(self, path)
    }
}

impl<'a> IntoIterator for &'a ExperimentStore {
    type Item = &'a Experiment;
    type IntoIter = std::slice::Iter<'a, Experiment>;

    fn into_iter(self) -> Self::IntoIter {
        self.experiments.iter()
    }
}
