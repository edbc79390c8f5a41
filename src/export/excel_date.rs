// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Interpret an exported date cell as an Excel serial, with the matching
/// number format. Only the layouts the report writes are recognised.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(("yyyy-mm-dd hh:mm", naive_datetime_to_excel_serial(&dt)));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_time(NaiveTime::MIN);
        return Some(("yyyy-mm-dd", naive_datetime_to_excel_serial(&dt)));
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    // Excel day 0 is 1899-12-30 once the 1900 leap-year bug is folded in
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or_default();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}
