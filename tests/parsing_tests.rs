use chrono::{DateTime, Local, NaiveDate};
use rvolunteerlog::core::report::ReportLogic;
use rvolunteerlog::db::store::RowStore;
use rvolunteerlog::models::entry::Column;
use rvolunteerlog::models::report::ReportFilter;
use rvolunteerlog::utils::date::{parse_date, parse_datetime};
use rvolunteerlog::utils::parse_hours;
use rusqlite::Connection;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(h, min, s))
        .expect("valid test date")
}

#[test]
fn hours_read_leading_number() {
    assert_eq!(parse_hours(Some("2.5h")), 2.5);
    assert_eq!(parse_hours(Some(" 3")), 3.0);
    assert_eq!(parse_hours(Some(".5")), 0.5);
    assert_eq!(parse_hours(Some("1e2")), 100.0);
    assert_eq!(parse_hours(Some("4 hours")), 4.0);
}

#[test]
fn negative_hours_are_kept() {
    assert_eq!(parse_hours(Some("-2")), -2.0);
    assert_eq!(parse_hours(Some("-0.75")), -0.75);
}

#[test]
fn unreadable_or_non_finite_hours_are_zero() {
    for cell in ["abc", "", "Infinity", "-Infinity", "NaN", "1e999", "h2"] {
        assert_eq!(parse_hours(Some(cell)), 0.0, "cell {cell:?}");
    }
    assert_eq!(parse_hours(None), 0.0);
}

#[test]
fn date_layouts_accepted() {
    let midnight = at(2024, 1, 15, 0, 0, 0);

    assert_eq!(parse_datetime("2024-01-15"), Some(midnight));
    assert_eq!(parse_datetime("2024/01/15"), Some(midnight));
    assert_eq!(parse_datetime("01/15/2024"), Some(midnight));
    assert_eq!(parse_datetime("  2024-01-15  "), Some(midnight));

    assert_eq!(parse_datetime("2024-01-15 09:30"), Some(at(2024, 1, 15, 9, 30, 0)));
    assert_eq!(parse_datetime("2024-01-15 09:30:15"), Some(at(2024, 1, 15, 9, 30, 15)));
    assert_eq!(parse_datetime("2024-01-15T09:30:15"), Some(at(2024, 1, 15, 9, 30, 15)));
}

#[test]
fn rfc3339_offset_is_converted_to_local() {
    let raw = "2024-01-15T10:00:00+02:00";
    let expected = DateTime::parse_from_rfc3339(raw)
        .expect("valid rfc3339")
        .with_timezone(&Local)
        .naive_local();

    assert_eq!(parse_datetime(raw), Some(expected));
}

#[test]
fn unparseable_dates_are_rejected() {
    for cell in ["", "   ", "not-a-date", "2024-13-01", "2024-02-30", "15.01.2024"] {
        assert_eq!(parse_datetime(cell), None, "cell {cell:?}");
    }
    assert_eq!(parse_date("2024-01-15 23:10"), NaiveDate::from_ymd_opt(2024, 1, 15));
}

/// A sheet imported without column types keeps numbers as numbers.
#[test]
fn numeric_cells_are_read_as_text() {
    let conn = Connection::open_in_memory().expect("open db");
    conn.execute_batch(
        "CREATE TABLE entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp, volunteer_name, email, start_date, end_date, gardens, hours, comments
        );
        INSERT INTO entries (volunteer_name, start_date, gardens, hours)
            VALUES ('John', '2024-01-15', 'Meadow', 2.5);
        INSERT INTO entries (volunteer_name, start_date, gardens, hours)
            VALUES ('Jane', '2024-01-16', 'Meadow', 4);",
    )
    .expect("seed rows");

    let rows = conn.read_rows().expect("read rows");
    assert_eq!(rows[0].cell(Column::Hours), Some("2.5"));
    assert_eq!(rows[1].cell(Column::Hours), Some("4"));
    assert_eq!(rows[0].cell(Column::Comments), None);

    let result = ReportLogic::run(&conn, &ReportFilter::default()).expect("report");
    assert_eq!(result.summary.total_entries, 2);
    assert_eq!(result.summary.total_hours, 6.5);
}
