use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::{AppError, AppResult};
use crate::models::entry::VolunteerEntry;
use crate::models::report::{ReportOutcome, ReportResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_hours, colorize_optional};
use crate::utils::format_hours;
use crate::utils::table::Table;

/// Build the filtered report. A store that cannot be opened is reported
/// through the same failure envelope as a read error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report { filter, json } = cmd else {
        return Ok(());
    };

    let filter = filter.to_filter();
    let outcome = match super::open_existing_store(cfg) {
        Ok(pool) => ReportLogic::generate(&pool, &filter),
        Err(e) => ReportOutcome::failed(format!("Error generating report: {e}")),
    };

    if *json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    let result = match outcome.into_result() {
        Ok(r) => r,
        Err(message) => return Err(AppError::Report(message)),
    };

    if !*json {
        print_report(&result);
    }
    Ok(())
}

fn print_report(result: &ReportResult) {
    if result.data.is_empty() {
        info("No entries match the selected filters.");
        return;
    }

    header("Volunteer hours report");

    let mut table = Table::new(&["Date", "End", "Volunteer", "Email", "Gardens", "Hours", "Comments"])
        .with_max_width(40);
    for e in &result.data {
        table.add_row(entry_row(e));
    }
    print!("{}", table.render());

    println!();
    println!(
        "Total: {} h over {} entries",
        format_hours(result.summary.total_hours),
        result.summary.total_entries
    );
}

fn entry_row(e: &VolunteerEntry) -> Vec<String> {
    vec![
        e.start_date_str(),
        e.end_date_str(),
        e.volunteer_name.clone(),
        colorize_optional(&e.email),
        colorize_optional(&e.gardens),
        colorize_hours(e.hours, &format_hours(e.hours)),
        colorize_optional(&e.comments),
    ]
}
