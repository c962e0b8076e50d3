// ABOUTME: Writes rendered text and table reports to disk.
// ABOUTME: An empty collection is refused before the destination file is created or touched.

use std::fs;
use std::path::Path;

use gradebook_core::StudentRecord;
use gradebook_core::export::{render_table_report, render_text_report};
use thiserror::Error;

/// Default file name for the plain-text report.
pub const TEXT_REPORT_FILE: &str = "relatorio_notas.txt";
/// Default file name for the delimited table report.
pub const TABLE_REPORT_FILE: &str = "relatorio_alunos.csv";

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no students to export")]
    Empty,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the plain-text report to `path`, overwriting any existing file.
pub fn write_text_report(path: &Path, records: &[StudentRecord]) -> Result<(), ExportError> {
    write_report(path, records, render_text_report)
}

/// Write the `;`-delimited table report to `path`, overwriting any existing file.
pub fn write_table_report(path: &Path, records: &[StudentRecord]) -> Result<(), ExportError> {
    write_report(path, records, render_table_report)
}

fn write_report(
    path: &Path,
    records: &[StudentRecord],
    render: fn(&[StudentRecord]) -> String,
) -> Result<(), ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(records))?;

    tracing::info!("exported {} records to {}", records.len(), path.display());
    Ok(())
}
