use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::errors::{AppError, AppResult};
use crate::models::stats::StatsOutcome;
use crate::ui::messages::header;
use crate::utils::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Stats { json } = cmd else {
        return Ok(());
    };

    let outcome = match super::open_existing_store(cfg) {
        Ok(pool) => StatsLogic::volunteer_stats(&pool),
        Err(e) => StatsOutcome::failed(e.to_string()),
    };

    if *json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    let stats = outcome.into_result().map_err(AppError::Report)?.stats;

    if !*json {
        header("Volunteer statistics");
        println!("  Volunteers     : {}", stats.total_volunteers);
        println!("  Entries        : {}", stats.total_entries);
        println!("  Total hours    : {}", format_hours(stats.total_hours));
        println!("  Average / entry: {}", format_hours(stats.average_hours));
    }
    Ok(())
}
