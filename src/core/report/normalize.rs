//! Raw row → typed entry.
//!
//! This is the boundary between the untrusted cell grid and the typed
//! pipeline: it never fails. A row either becomes a [`VolunteerEntry`] with
//! safe defaults substituted, or it is skipped.

use crate::models::entry::{Column, RawRow, VolunteerEntry};
use crate::utils::date::parse_datetime;
use crate::utils::text::{non_blank, parse_hours};
use tracing::debug;

/// Why a row was left out of every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyRow,
    MissingName,
    MissingStartDate,
    InvalidStartDate,
}

/// Normalize one row, or `None` when it must be skipped.
pub fn normalize_row(row: &RawRow) -> Option<VolunteerEntry> {
    match classify_row(row) {
        Ok(entry) => Some(entry),
        Err(reason) => {
            debug!(row = row.position, ?reason, "skipping row");
            None
        }
    }
}

/// Same as [`normalize_row`] but keeps the skip reason.
pub fn classify_row(row: &RawRow) -> Result<VolunteerEntry, SkipReason> {
    if row.is_empty() {
        return Err(SkipReason::EmptyRow);
    }

    // only an empty or absent name skips; whitespace still counts as a name
    if row
        .cell(Column::VolunteerName)
        .filter(|s| !s.is_empty())
        .is_none()
    {
        return Err(SkipReason::MissingName);
    }

    let start_raw = non_blank(row.cell(Column::StartDate)).ok_or(SkipReason::MissingStartDate)?;
    let start_date = parse_datetime(start_raw).ok_or(SkipReason::InvalidStartDate)?;

    // an unreadable end date falls back to the start date
    let end_date = row
        .cell(Column::EndDate)
        .and_then(parse_datetime)
        .unwrap_or(start_date);

    let text = |c: Column| row.cell(c).unwrap_or_default().to_string();

    Ok(VolunteerEntry {
        position: row.position,
        timestamp: text(Column::Timestamp),
        volunteer_name: text(Column::VolunteerName),
        email: text(Column::Email),
        start_date,
        end_date,
        gardens: text(Column::Gardens),
        hours: parse_hours(row.cell(Column::Hours)),
        comments: text(Column::Comments),
    })
}
