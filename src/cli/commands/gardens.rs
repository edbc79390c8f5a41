use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::garden::GardenLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Public list of active gardens, as offered on the submission form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gardens { json } = cmd {
        let pool = super::open_store(cfg)?;
        let gardens = GardenLogic::from_config(cfg).list_active(&pool)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&gardens)?);
            return Ok(());
        }

        if gardens.is_empty() {
            info("No active gardens.");
            return Ok(());
        }

        for g in &gardens {
            if g.location.is_empty() {
                println!("  • {}", g.name);
            } else {
                println!("  • {} ({})", g.name, g.location);
            }
        }
    }
    Ok(())
}
