// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::EntryExport;
use crate::models::report::ReportOutcome;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the whole report envelope, pretty-printed.
pub(crate) fn export_json(outcome: &ReportOutcome, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(outcome)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

/// Export CSV (header row comes from serde field names).
pub(crate) fn export_csv(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for item in entries {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    Ok(())
}
