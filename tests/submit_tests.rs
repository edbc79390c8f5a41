use rvolunteerlog::core::notify::{
    CONFIRMATION_SUBJECT, Confirmation, NoopNotifier, Notifier, OutboxNotifier, load_outbox,
};
use rvolunteerlog::core::report::ReportLogic;
use rvolunteerlog::core::sample::SampleLogic;
use rvolunteerlog::core::submit::{SubmissionForm, SubmitLogic};
use rvolunteerlog::db::store::count_entries;
use rvolunteerlog::errors::{AppError, AppResult};
use rvolunteerlog::models::report::ReportFilter;

mod common;
use common::memory_pool;

fn form() -> SubmissionForm {
    SubmissionForm {
        volunteer_name: "Jane Doe".to_string(),
        email: "jane@example.org".to_string(),
        start_date: "2024-03-02".to_string(),
        end_date: None,
        gardens: vec!["Rose Garden".to_string(), "Meadow".to_string()],
        hours: "2.5".to_string(),
        comments: None,
    }
}

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn send(&self, _message: &Confirmation) -> AppResult<()> {
        Err(AppError::Notify("smtp down".to_string()))
    }
}

#[test]
fn prepare_sanitizes_and_joins_gardens() {
    let mut f = form();
    f.volunteer_name = " <b>Jane</b> ".to_string();
    f.comments = Some("weeding & \"watering\"".to_string());

    let entry = SubmitLogic::prepare(&f).unwrap();
    assert_eq!(entry.volunteer_name, "&lt;b&gt;Jane&lt;&#x2F;b&gt;");
    assert_eq!(entry.gardens, "Rose Garden, Meadow");
    assert_eq!(entry.comments, "weeding & &quot;watering&quot;");
    assert_eq!(entry.end_date, entry.start_date);
    assert_eq!(entry.hours, 2.5);
}

#[test]
fn prepare_rejects_missing_fields_and_bad_dates() {
    let mut f = form();
    f.volunteer_name = "  ".to_string();
    assert!(matches!(SubmitLogic::prepare(&f), Err(AppError::MissingField(_))));

    let mut f = form();
    f.email = String::new();
    assert!(matches!(SubmitLogic::prepare(&f), Err(AppError::MissingField(_))));

    let mut f = form();
    f.start_date = "yesterday".to_string();
    assert!(matches!(SubmitLogic::prepare(&f), Err(AppError::InvalidDate(_))));

    let mut f = form();
    f.end_date = Some("2024-13-45".to_string());
    assert!(matches!(SubmitLogic::prepare(&f), Err(AppError::InvalidDate(_))));
}

#[test]
fn unreadable_hours_are_stored_as_zero() {
    let mut f = form();
    f.hours = "a few".to_string();
    assert_eq!(SubmitLogic::prepare(&f).unwrap().hours, 0.0);
}

#[test]
fn submission_is_reportable_and_queues_confirmation() {
    let pool = memory_pool();
    let outbox = OutboxNotifier::new(&pool.conn);

    let mut f = form();
    f.end_date = Some("2024-03-03".to_string());
    let receipt = SubmitLogic::submit(&pool, &f, Some(&outbox)).unwrap();

    assert!(receipt.notified);
    assert!(receipt.message.contains("confirmation email has been sent"));

    let queued = load_outbox(&pool.conn).unwrap();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].recipient, "jane@example.org");
    assert_eq!(queued[0].subject, CONFIRMATION_SUBJECT);
    assert!(queued[0].body.starts_with("Dear Jane Doe,"));
    assert!(queued[0].body.contains("Date(s): 2024-03-02 to 2024-03-03"));
    assert!(queued[0].body.contains("Comments: None"));

    let result = ReportLogic::run(&pool, &ReportFilter::default().with_garden("meadow")).unwrap();
    assert_eq!(result.summary.total_entries, 1);
    assert_eq!(result.summary.total_hours, 2.5);
    assert_eq!(result.data[0].end_date_str(), "2024-03-03");
}

#[test]
fn failed_confirmation_keeps_the_entry() {
    let pool = memory_pool();

    let receipt = SubmitLogic::submit(&pool, &form(), Some(&FailingNotifier)).unwrap();

    assert!(!receipt.notified);
    assert_eq!(receipt.message, "Volunteer hours submitted successfully!");
    assert_eq!(count_entries(&pool.conn).unwrap(), 1);
}

#[test]
fn without_notifier_nothing_is_queued() {
    let pool = memory_pool();

    SubmitLogic::submit(&pool, &form(), None).unwrap();
    assert!(load_outbox(&pool.conn).unwrap().is_empty());

    let receipt = SubmitLogic::submit(&pool, &form(), Some(&NoopNotifier)).unwrap();
    assert!(receipt.notified);
    assert!(load_outbox(&pool.conn).unwrap().is_empty());
}

#[test]
fn sample_entries_are_appended() {
    let pool = memory_pool();

    assert_eq!(SampleLogic::add_sample_entries(&pool).unwrap(), 3);

    let result = ReportLogic::run(&pool, &ReportFilter::default()).unwrap();
    let names: Vec<_> = result.data.iter().map(|e| e.volunteer_name.as_str()).collect();
    assert_eq!(names, ["John Smith", "Jane Doe", "Bob Wilson"]);
    assert_eq!(result.summary.total_hours, 9.5);
}
