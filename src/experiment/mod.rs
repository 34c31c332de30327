//! Experiment records, validation, analysis and reporting
//!
//! ## Overview
//!
//! ```text
//! ExperimentStore ──< Experiment (ordered, positions 0..len)
//!        │                 └── Category (closed set)
//!        ├── analyze  → Analysis   (average / maximum / minimum)
//!        ├── compare  → Comparison (entries + best / worst by average)
//!        └── report   → text document (INFORME DE EXPERIMENTOS)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lab_ledger::experiment::ExperimentStore;
//!
//! let mut store = ExperimentStore::new();
//! store.add("Trial A", "01/01/2024", "Chemistry", vec![1.0, 2.0, 3.0])?;
//! store.add("Trial B", "02/01/2024", "Chemistry", vec![10.0, 20.0, 30.0])?;
//!
//! let analysis = store.analyze(0).expect("position 0 exists");
//! assert!((analysis.average - 2.0).abs() < f64::EPSILON);
//!
//! let comparison = store.compare(&[0, 1])?;
//! assert_eq!(comparison.best.map(|s| s.name).as_deref(), Some("Trial B"));
//! # Ok::<(), lab_ledger::Error>(())
//! ```

mod analysis;
mod category;
mod experiment_record;
pub mod report;
mod store;

pub use analysis::{Analysis, Comparison, ComparisonEntry, Standing};
pub use category::Category;
pub use experiment_record::{parse_date, Experiment, ExperimentInput, DATE_FORMAT, MIN_RESULTS};
pub use store::ExperimentStore;
