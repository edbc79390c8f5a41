// src/export/model.rs

use crate::models::entry::{Column, VolunteerEntry};
use serde::Serialize;

/// Flat row for file exports of a report.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub timestamp: String,
    pub volunteer_name: String,
    pub email: String,
    pub start_date: String,
    pub end_date: String,
    pub gardens: String,
    pub hours: f64,
    pub comments: String,
}

impl From<&VolunteerEntry> for EntryExport {
    fn from(e: &VolunteerEntry) -> Self {
        Self {
            timestamp: e.timestamp.clone(),
            volunteer_name: e.volunteer_name.clone(),
            email: e.email.clone(),
            start_date: e.start_date_str(),
            end_date: e.end_date_str(),
            gardens: e.gardens.clone(),
            hours: e.hours,
            comments: e.comments.clone(),
        }
    }
}

/// Column headers for XLSX, in storage order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    Column::ALL.iter().map(|c| c.header()).collect()
}

/// One export row as strings, in header order.
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.timestamp.clone(),
        e.volunteer_name.clone(),
        e.email.clone(),
        e.start_date.clone(),
        e.end_date.clone(),
        e.gardens.clone(),
        e.hours.to_string(),
        e.comments.clone(),
    ]
}
