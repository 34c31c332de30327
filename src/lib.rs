//! # lab-ledger: In-Memory Scientific Experiment Ledger
//!
//! lab-ledger keeps an ordered collection of validated experiment records
//! and derives everything else from it: per-experiment statistics,
//! best/worst comparisons across experiments, and a plain-text report.
//!
//! ## Design Principles
//!
//! - **All-or-nothing validation**: a record enters the store only after
//!   every check passed; a rejected `add` leaves the store untouched
//! - **Position as identity**: records are addressed by their 0-based
//!   position, and removal compacts the positions after it
//! - **Recoverable errors**: every failure is a [`Error`] value returned to
//!   the caller, never a panic
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lab_ledger::experiment::ExperimentStore;
//!
//! let mut store = ExperimentStore::new();
//! store.add("Titration", "14/03/2024", "Chemistry", vec![7.1, 6.9, 7.0])?;
//!
//! for experiment in store.list() {
//!     println!("{} ({})", experiment.name(), experiment.category());
//! }
//!
//! let written = store.write_report("informe")?;
//! println!("Report written to {}", written.display());
//! # Ok::<(), lab_ledger::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;

pub use error::{Error, Result, ValidationError};
