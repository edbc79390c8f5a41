use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::append_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::NewEntry;
use chrono::NaiveDate;

/// (name, email, date, gardens, hours, comments)
const SAMPLE_ROWS: [(&str, &str, &str, &str, f64, &str); 3] = [
    (
        "John Smith",
        "john@email.com",
        "2024-01-15",
        "Community Garden North",
        3.0,
        "Planted tomatoes",
    ),
    (
        "Jane Doe",
        "jane@email.com",
        "2024-01-16",
        "Butterfly Garden",
        2.5,
        "Weeding and watering",
    ),
    (
        "Bob Wilson",
        "bob@email.com",
        "2024-01-17",
        "Herb Garden, Community Garden South",
        4.0,
        "Harvesting herbs and general maintenance",
    ),
];

pub struct SampleLogic;

impl SampleLogic {
    /// Append the demo entries; returns how many were written.
    pub fn add_sample_entries(pool: &DbPool) -> AppResult<usize> {
        for (name, email, date, gardens, hours, comments) in SAMPLE_ROWS {
            let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(date.to_string()))?;

            append_entry(
                &pool.conn,
                &NewEntry {
                    volunteer_name: name.to_string(),
                    email: email.to_string(),
                    start_date: day,
                    end_date: day,
                    gardens: gardens.to_string(),
                    hours,
                    comments: comments.to_string(),
                },
            )?;
        }

        ttlog_quiet(
            &pool.conn,
            "sample",
            "entries",
            &format!("Added {} sample entries", SAMPLE_ROWS.len()),
        );
        Ok(SAMPLE_ROWS.len())
    }
}
