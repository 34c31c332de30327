//! Analysis - summary statistics and multi-experiment comparison

use serde::{Deserialize, Serialize};

use super::MIN_RESULTS;

/// Average, maximum and minimum of one experiment's results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Arithmetic mean
    pub average: f64,
    /// Largest result
    pub maximum: f64,
    /// Smallest result
    pub minimum: f64,
}

impl Analysis {
    /// Compute statistics over `results`.
    ///
    /// Returns `None` when there are fewer than [`MIN_RESULTS`] values.
    /// No special handling for NaN or infinities.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_results(results: &[f64]) -> Option<Self> {
        if results.len() < MIN_RESULTS {
            return None;
        }

        let sum: f64 = results.iter().sum();
        let maximum = results.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let minimum = results.iter().copied().fold(f64::INFINITY, f64::min);

        Some(Self {
            average: sum / results.len() as f64,
            maximum,
            minimum,
        })
    }
}

/// Metrics for one position taking part in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Store position
    pub index: usize,
    /// Experiment name
    pub name: String,
    /// Statistics for that experiment
    pub analysis: Analysis,
}

/// Best or worst experiment of a comparison, ranked by average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// Store position
    pub index: usize,
    /// Experiment name
    pub name: String,
    /// Average that earned the standing
    pub average: f64,
}

/// Result of comparing several experiments.
///
/// `best` and `worst` are `None` only when no entry was processed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// One entry per requested position, in request order
    pub entries: Vec<ComparisonEntry>,
    /// Highest average (first seen wins ties)
    pub best: Option<Standing>,
    /// Lowest average (first seen wins ties)
    pub worst: Option<Standing>,
}

impl Comparison {
    /// True when nothing was compared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and update best/worst.
    pub(crate) fn push(&mut self, entry: ComparisonEntry) {
        let average = entry.analysis.average;
        let standing = || Standing {
            index: entry.index,
            name: entry.name.clone(),
            average,
        };

        // Strict comparisons keep the first-seen entry on ties
        if self.best.as_ref().map_or(true, |best| average > best.average) {
            self.best = Some(standing());
        }
        if self.worst.as_ref().map_or(true, |worst| average < worst.average) {
            self.worst = Some(standing());
        }

        self.entries.push(entry);
    }
}
