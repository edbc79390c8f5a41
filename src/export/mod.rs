//! File exports of a volunteer hours report.

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::EntryExport;

use crate::models::report::ReportSummary;
use crate::ui::messages::success;
use crate::utils::format_hours;
use clap::ValueEnum;
use std::path::Path;

/// Completion line with what the file holds.
pub(crate) fn notify_export_success(format: ExportFormat, summary: &ReportSummary, path: &Path) {
    success(format!(
        "{} export completed: {} entries, {} h -> {}",
        format.label(),
        summary.total_entries,
        format_hours(summary.total_hours),
        path.display()
    ));
}

/// Output file formats for `export --format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per entry, serde field names as header
    Csv,
    /// The whole report envelope
    Json,
    /// Styled workbook with a totals row
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Xlsx => "XLSX",
        }
    }
}
