//! Experiment - validated record of one scientific trial

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::{Result, ValidationError};

/// Minimum number of results an experiment must carry.
pub const MIN_RESULTS: usize = 3;

/// Date layout accepted on input and used on output (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Unvalidated experiment fields, as typed by a user or read from JSON.
///
/// This is also the serde form of [`Experiment`]: deserializing an
/// `Experiment` runs [`Experiment::new`] on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentInput {
    /// Experiment name
    pub name: String,
    /// Date text in `DD/MM/YYYY` form
    pub date: String,
    /// Category label
    pub category: String,
    /// Measured results
    pub results: Vec<f64>,
}

/// Experiment represents one validated trial.
///
/// Instances only exist after every check in [`Experiment::new`] has passed,
/// and they are never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ExperimentInput", into = "ExperimentInput")]
pub struct Experiment {
    name: String,
    date: NaiveDate,
    category: Category,
    results: Vec<f64>,
}

impl Experiment {
    /// Validate raw input and build an experiment.
    ///
    /// Checks run in this order and stop at the first failure:
    /// 1. at least [`MIN_RESULTS`] results
    /// 2. `date_text` is a calendar date in `DD/MM/YYYY` form
    /// 3. `category` is one of the [`Category`] labels
    /// 4. `name` is not blank
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] describing the failed check.
    pub fn new(
        name: impl Into<String>,
        date_text: &str,
        category: &str,
        results: Vec<f64>,
    ) -> Result<Self> {
        if results.len() < MIN_RESULTS {
            return Err(ValidationError::TooFewResults {
                count: results.len(),
                minimum: MIN_RESULTS,
            }
            .into());
        }

        let date = parse_date(date_text)?;
        let category: Category = category.parse()?;

        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        Ok(Self {
            name,
            date,
            category,
            results,
        })
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date rendered as `DD/MM/YYYY`; identical to the accepted input.
    #[must_use]
    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Get the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Get the results in submission order.
    #[must_use]
    pub fn results(&self) -> &[f64] {
        &self.results
    }

    /// Build a record without validation, for exercising defensive paths.
    #[cfg(test)]
    pub(crate) fn unchecked(
        name: &str,
        date: NaiveDate,
        category: Category,
        results: Vec<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            date,
            category,
            results,
        }
    }
}

impl TryFrom<ExperimentInput> for Experiment {
    type Error = crate::Error;

    fn try_from(input: ExperimentInput) -> Result<Self> {
        Self::new(input.name, &input.date, &input.category, input.results)
    }
}

impl From<Experiment> for ExperimentInput {
    fn from(experiment: Experiment) -> Self {
        Self {
            date: experiment.date_text(),
            category: experiment.category.as_str().to_string(),
            name: experiment.name,
            results: experiment.results,
        }
    }
}

/// Parse a strict `DD/MM/YYYY` date.
///
/// The shape is checked first (two-digit day and month, four-digit year,
/// slash separators) because chrono alone also accepts unpadded fields.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] for bad shape or impossible dates.
pub fn parse_date(text: &str) -> std::result::Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        input: text.to_string(),
    };

    let mut parts = text.split('/');
    let well_formed = [2, 2, 4].into_iter().all(|width| {
        parts
            .next()
            .is_some_and(|part| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()))
    }) && parts.next().is_none();

    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}
