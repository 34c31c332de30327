//! Report - plain-text export of every stored experiment
//!
//! ## Layout
//!
//! ```text
//! INFORME DE EXPERIMENTOS
//! ==============================
//!
//! Experimento #1
//! Nombre: Trial A
//! Fecha: 01/01/2024
//! Tipo: Chemistry
//! Resultados: [1.0, 2.0, 3.0]
//! Análisis de resultados:
//! - Promedio: 2.00
//! - Máximo: 3.0
//! - Mínimo: 1.0
//!
//! ```
//!
//! Maximum and minimum use Rust's shortest round-trip float formatting, so
//! parsing them back yields the exact values `analyze` returns.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Analysis, Experiment};
use crate::Result;

/// First line of every report.
pub const REPORT_TITLE: &str = "INFORME DE EXPERIMENTOS";

/// Line printed instead of the analysis block for short result lists.
pub const INSUFFICIENT_DATA: &str =
    "No hay suficientes resultados para realizar el análisis (mínimo 3)";

const RULE_WIDTH: usize = 30;
const REPORT_EXTENSION: &str = ".txt";

/// Render the report text for `experiments`, numbered from 1 in order.
///
/// Pure and total: any sequence of experiments (including none) renders.
#[must_use]
pub fn render_report<'a>(experiments: impl IntoIterator<Item = &'a Experiment>) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for (position, experiment) in experiments.into_iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write_entry(&mut out, position + 1, experiment);
    }

    out
}

fn write_entry(out: &mut String, number: usize, experiment: &Experiment) -> std::fmt::Result {
    writeln!(out, "Experimento #{number}")?;
    writeln!(out, "Nombre: {}", experiment.name())?;
    writeln!(out, "Fecha: {}", experiment.date_text())?;
    writeln!(out, "Tipo: {}", experiment.category())?;
    writeln!(out, "Resultados: {:?}", experiment.results())?;

    match Analysis::from_results(experiment.results()) {
        Some(analysis) => {
            writeln!(out, "Análisis de resultados:")?;
            writeln!(out, "- Promedio: {:.2}", analysis.average)?;
            writeln!(out, "- Máximo: {:?}", analysis.maximum)?;
            writeln!(out, "- Mínimo: {:?}", analysis.minimum)?;
        }
        None => writeln!(out, "{INSUFFICIENT_DATA}")?,
    }

    writeln!(out)
}

/// Normalize a caller-supplied report name, appending `.txt` when missing.
#[must_use]
pub fn report_path(name: impl AsRef<Path>) -> PathBuf {
    let path = name.as_ref();
    if path.to_string_lossy().ends_with(REPORT_EXTENSION) {
        path.to_path_buf()
    } else {
        let mut file_name = path.as_os_str().to_os_string();
        file_name.push(REPORT_EXTENSION);
        PathBuf::from(file_name)
    }
}

/// Write the report for `experiments` to `path` (after [`report_path`]).
///
/// The file handle lives only for this call. A failure part way through
/// leaves whatever was already written on disk.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the file cannot be created or written.
pub fn write_report<'a>(
    experiments: impl IntoIterator<Item = &'a Experiment>,
    path: impl AsRef<Path>,
) -> Result<PathBuf> {
    let path = report_path(path);
    let text = render_report(experiments);

    let mut writer = BufWriter::new(File::create(&path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    debug!(path = %path.display(), bytes = text.len(), "report written");
    Ok(path)
}
