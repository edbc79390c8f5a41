use crate::cli::parser::{Commands, GardenAction};
use crate::config::Config;
use crate::core::garden::GardenLogic;
use crate::errors::AppResult;
use crate::models::garden::{Garden, GardenUpdate};
use crate::ui::messages::{info, success};
use crate::utils::colors::{colorize_active, colorize_optional};
use crate::utils::table::Table;

/// Admin maintenance of the gardens table. The caller has already checked
/// admin rights.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Garden { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_store(cfg)?;
    let mut logic = GardenLogic::from_config(cfg);

    match action {
        GardenAction::List { json } => {
            let gardens = logic.list_all(&pool)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&gardens)?);
            } else if gardens.is_empty() {
                info("No gardens configured.");
            } else {
                print_gardens(&gardens);
            }
        }
        GardenAction::Add { name, location } => {
            let g = logic.add(&pool, name, location)?;
            success(format!("Garden added successfully (row {}): {}", g.row_index, g.name));
        }
        GardenAction::Update {
            id,
            name,
            location,
            active,
        } => {
            let changes = GardenUpdate {
                name: name.clone(),
                location: location.clone(),
                active: active.map(|a| a.as_flag().to_string()),
            };
            let g = logic.update(&pool, *id, &changes)?;
            success(format!(
                "Garden updated successfully (row {}): {} [{}]",
                g.row_index, g.name, g.active
            ));
        }
        GardenAction::Delete { id } => {
            logic.delete(&pool, *id)?;
            success(format!("Garden deleted successfully (row {id})"));
        }
    }

    Ok(())
}

fn print_gardens(gardens: &[Garden]) {
    let mut table = Table::new(&["Row", "Name", "Location", "Active"]);
    for g in gardens {
        table.add_row(vec![
            g.row_index.to_string(),
            g.name.clone(),
            colorize_optional(&g.location),
            colorize_active(&g.active),
        ]);
    }
    print!("{}", table.render());
}
