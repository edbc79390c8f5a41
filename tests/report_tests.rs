use rvolunteerlog::core::report::ReportLogic;
use rvolunteerlog::core::report::aggregate::aggregate;
use rvolunteerlog::core::report::filter::{CompiledFilter, FilterReason, entry_matches};
use rvolunteerlog::core::report::normalize::{SkipReason, classify_row, normalize_row};
use rvolunteerlog::db::store::RowStore;
use rvolunteerlog::errors::{AppError, AppResult};
use rvolunteerlog::models::entry::RawRow;
use rvolunteerlog::models::report::{ReportFilter, ReportOutcome};
use rusqlite::Connection;

mod common;
use common::{memory_pool, push_rows, row};

fn raw(position: usize, cells: &[&str]) -> RawRow {
    RawRow::from_strs(position, cells)
}

/// timestamp, name, email, start, end, gardens, hours, comments
fn john() -> RawRow {
    raw(
        1,
        &["2024-01-15T10:00:00Z", "John", "john@example.org", "2024-01-15", "", "Rose Garden", "3", ""],
    )
}

struct UnreachableStore;

impl RowStore for UnreachableStore {
    fn read_rows(&self) -> AppResult<Vec<RawRow>> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }
}

#[test]
fn no_filter_returns_every_valid_entry() {
    let result = ReportLogic::build(&[john()], &ReportFilter::default());

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.summary.total_entries, 1);
    assert_eq!(result.summary.total_hours, 3.0);
}

#[test]
fn garden_filter_is_case_insensitive_substring() {
    let filter = ReportFilter::default().with_garden("rose");
    let result = ReportLogic::build(&[john()], &filter);
    assert_eq!(result.data.len(), 1);

    let multi = raw(2, &["", "Ann", "", "2024-01-16", "", "Herb Garden, Rose Garden", "1", ""]);
    let result = ReportLogic::build(&[multi], &ReportFilter::default().with_garden("Rose"));
    assert_eq!(result.data.len(), 1);
}

#[test]
fn date_range_excludes_entries_outside_window() {
    let filter = ReportFilter::between("2024-02-01", "2024-02-28");
    let result = ReportLogic::build(&[john()], &filter);

    assert!(result.data.is_empty());
    assert_eq!(result.summary.total_hours, 0.0);
    assert_eq!(result.summary.total_entries, 0);
}

#[test]
fn invalid_start_date_is_never_reported() {
    let bad = raw(1, &["", "John", "", "not-a-date", "", "Rose Garden", "3", ""]);

    assert_eq!(classify_row(&bad).unwrap_err(), SkipReason::InvalidStartDate);

    for filter in [
        ReportFilter::default(),
        ReportFilter::default().with_volunteer("john"),
        ReportFilter::default().with_garden("rose"),
    ] {
        assert!(ReportLogic::build(std::slice::from_ref(&bad), &filter).data.is_empty());
    }
}

#[test]
fn non_numeric_hours_count_as_zero() {
    let row = raw(1, &["", "John", "", "2024-01-15", "", "Rose Garden", "abc", ""]);
    let result = ReportLogic::build(&[row, john()], &ReportFilter::default());

    assert_eq!(result.data.len(), 2);
    assert_eq!(result.data[0].hours, 0.0);
    assert_eq!(result.summary.total_hours, 3.0);
}

#[test]
fn results_keep_store_order_and_sum() {
    let rows = [
        raw(1, &["", "Zoe", "", "2024-03-01", "", "Meadow", "1.5", ""]),
        raw(2, &["", "Adam", "", "2024-01-01", "", "Wellington", "2.25", ""]),
    ];
    let result = ReportLogic::build(&rows, &ReportFilter::default());

    let names: Vec<_> = result.data.iter().map(|e| e.volunteer_name.as_str()).collect();
    assert_eq!(names, ["Zoe", "Adam"]);
    assert_eq!(result.summary.total_entries, 2);
    assert_eq!(result.summary.total_hours, 3.75);
}

#[test]
fn rows_without_name_or_start_are_skipped() {
    assert_eq!(classify_row(&RawRow::new(1, vec![])).unwrap_err(), SkipReason::EmptyRow);
    assert_eq!(
        classify_row(&raw(2, &["", "", "", "2024-01-15"])).unwrap_err(),
        SkipReason::MissingName
    );
    assert_eq!(
        classify_row(&raw(4, &["", "John", "", ""])).unwrap_err(),
        SkipReason::MissingStartDate
    );
}

#[test]
fn whitespace_name_is_still_reported() {
    let row = raw(1, &["", "   ", "", "2024-01-15", "", "Rose Garden", "3", ""]);
    let result = ReportLogic::build(&[row], &ReportFilter::default());

    assert_eq!(result.summary.total_entries, 1);
    assert_eq!(result.summary.total_hours, 3.0);
    assert_eq!(result.data[0].volunteer_name, "   ");
}

#[test]
fn short_rows_default_missing_cells() {
    let entry = normalize_row(&raw(7, &["", "John", "", "2024-01-15"])).expect("valid row");

    assert_eq!(entry.position, 7);
    assert_eq!(entry.email, "");
    assert_eq!(entry.gardens, "");
    assert_eq!(entry.comments, "");
    assert_eq!(entry.hours, 0.0);
}

#[test]
fn bad_or_missing_end_date_falls_back_to_start() {
    let missing = normalize_row(&john()).expect("valid row");
    assert_eq!(missing.end_date, missing.start_date);

    let bad = normalize_row(&raw(1, &["", "John", "", "2024-01-15", "soon", "", "1", ""]))
        .expect("valid row");
    assert_eq!(bad.end_date, bad.start_date);

    let good = normalize_row(&raw(1, &["", "John", "", "2024-01-15", "2024-01-17", "", "1", ""]))
        .expect("valid row");
    assert_eq!(good.end_date_str(), "2024-01-17");
}

#[test]
fn range_is_full_day_containment() {
    // timed entry late on the last day is still inside
    let late = normalize_row(&raw(1, &["", "John", "", "2024-02-28 22:30", "", "", "1", ""]))
        .expect("valid row");
    assert!(entry_matches(&late, &ReportFilter::between("2024-02-01", "2024-02-28")));

    // overlapping the end of the window is not enough
    let spanning = normalize_row(&raw(1, &["", "John", "", "2024-02-27", "2024-03-02", "", "1", ""]))
        .expect("valid row");
    let compiled = CompiledFilter::compile(&ReportFilter::between("2024-02-01", "2024-02-28"));
    assert_eq!(compiled.reasons(&spanning), vec![FilterReason::EndAfterRange]);

    let early = normalize_row(&raw(1, &["", "John", "", "2024-01-31", "2024-02-02", "", "1", ""]))
        .expect("valid row");
    assert_eq!(compiled.reasons(&early), vec![FilterReason::StartBeforeRange]);
}

#[test]
fn single_or_malformed_bound_is_ignored() {
    let entry = normalize_row(&john()).expect("valid row");

    let only_start = ReportFilter {
        start_date: Some("2030-01-01".to_string()),
        ..Default::default()
    };
    assert!(entry_matches(&entry, &only_start));

    let malformed = ReportFilter::between("garbage", "2024-01-01");
    assert!(CompiledFilter::compile(&malformed).window.is_none());
    assert!(entry_matches(&entry, &malformed));
}

#[test]
fn name_filter_is_trimmed_and_case_insensitive() {
    let entry = normalize_row(&raw(1, &["", "Jane Doe", "", "2024-01-15"])).expect("valid row");

    assert!(entry_matches(&entry, &ReportFilter::default().with_volunteer("  DOE ")));
    assert!(entry_matches(&entry, &ReportFilter::default().with_volunteer("   ")));
    assert!(!entry_matches(&entry, &ReportFilter::default().with_volunteer("john")));
    assert!(entry_matches(&entry, &ReportFilter::default().with_garden("")));
}

#[test]
fn summary_matches_returned_data() {
    let rows: Vec<RawRow> = (1..=6)
        .map(|i| {
            let hours = format!("{}.5", i);
            let name = if i % 2 == 0 { "Even" } else { "Odd" };
            raw(i, &["", name, "", "2024-05-10", "", "Meadow", hours.as_str(), ""])
        })
        .collect();

    let result = ReportLogic::build(&rows, &ReportFilter::default().with_volunteer("even"));
    let sum: f64 = result.data.iter().map(|e| e.hours).sum();

    assert_eq!(result.summary.total_entries, result.data.len());
    assert_eq!(result.summary.total_hours, sum);
    assert_eq!(result.data.len(), 3);
    assert_eq!(aggregate(&result.data).total_hours, result.summary.total_hours);
}

#[test]
fn generate_reads_sqlite_store() {
    let pool = memory_pool();
    push_rows(
        &pool,
        &[
            &row("John", "2024-01-15", "Rose Garden", "3"),
            &row("Jane", "not-a-date", "Meadow", "2"),
            &row("Bob", "2024-01-20", "Meadow", "4"),
        ],
    );

    let outcome = ReportLogic::generate(&pool, &ReportFilter::between("2024-01-01", "2024-01-31"));
    assert!(outcome.is_success());

    let result = outcome.into_result().expect("report data");
    assert_eq!(result.summary.total_entries, 2);
    assert_eq!(result.summary.total_hours, 7.0);
}

#[test]
fn unreachable_store_gives_failure_envelope() {
    let outcome: ReportOutcome = ReportLogic::generate(&UnreachableStore, &ReportFilter::default());

    assert!(!outcome.is_success());
    assert!(outcome.payload().is_none());
    let message = outcome.message.clone().expect("failure message");
    assert!(message.starts_with("Error generating report:"));
    assert!(message.contains("connection refused"));

    let json = serde_json::to_value(&outcome).expect("serialize envelope");
    assert_eq!(json["success"], false);
    assert!(json.get("data").is_none());
}

#[test]
fn missing_table_gives_failure_envelope() {
    let conn = Connection::open_in_memory().expect("open db");
    let outcome = ReportLogic::generate(&conn, &ReportFilter::default());

    assert!(!outcome.is_success());
    assert!(outcome.message.is_some());
}

#[test]
fn success_envelope_uses_camel_case_fields() {
    let outcome = ReportOutcome::ok(ReportLogic::build(&[john()], &ReportFilter::default()));
    let json = serde_json::to_value(&outcome).expect("serialize envelope");

    assert_eq!(json["success"], true);
    assert_eq!(json["summary"]["totalHours"], 3.0);
    assert_eq!(json["summary"]["totalEntries"], 1);
    assert_eq!(json["data"][0]["volunteerName"], "John");
    assert_eq!(json["data"][0]["startDate"], "2024-01-15T00:00:00");
    assert!(json.get("message").is_none());
}
