// src/export/logic.rs

use crate::core::report::ReportLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::xlsx::export_xlsx;
use crate::models::report::{ReportFilter, ReportSummary};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level logic for writing a report to a file.
pub struct ExportLogic;

impl ExportLogic {
    /// Run the report for `filter` and write it as `format` to `path`.
    ///
    /// A failed report aborts the export with its message; an empty report
    /// writes nothing and returns an empty summary.
    pub fn export(
        pool: &DbPool,
        filter: &ReportFilter,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<ReportSummary> {
        let outcome = ReportLogic::generate(pool, filter);

        let result = match outcome.payload() {
            Some(r) if outcome.is_success() => r,
            _ => {
                return Err(AppError::Export(
                    outcome
                        .message
                        .clone()
                        .unwrap_or_else(|| "report failed".to_string()),
                ));
            }
        };

        if result.data.is_empty() {
            warning("No entries match the selected filters; nothing exported.");
            return Ok(result.summary);
        }

        ensure_parent_dir(path)?;
        ensure_writable(path, force)?;

        let rows: Vec<EntryExport> = result.data.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&outcome, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &result.summary, path)?,
        }
        notify_export_success(format, &result.summary, path);

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} entries, {} h as {}",
                result.summary.total_entries,
                result.summary.total_hours,
                format.as_str()
            ),
        );

        Ok(result.summary)
    }
}
