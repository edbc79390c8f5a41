use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::garden::GardenLogic;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file, with the admin address when given
///  - the SQLite row store and its tables
///  - the default gardens, when the gardens table is empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    let admin = match &cli.command {
        Commands::Init { admin } => admin.as_deref(),
        _ => None,
    };

    //
    // 1. Configuration
    //
    let cfg = Config::init_all(cli.db.as_deref(), admin, cli.test)?;

    println!("⚙️  Initializing rVolunteerLog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    if cfg.admin_email.is_empty() {
        warning("No admin email configured; admin commands stay locked (use --admin).");
    } else {
        info(format!("Admin        : {}", cfg.admin_email));
    }

    //
    // 2. Tables
    //
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    success(format!("Database initialized at {}", &cfg.database));

    //
    // 3. Default gardens
    //
    let seeded = GardenLogic::from_config(&cfg).seed_defaults(&pool)?;
    if seeded > 0 {
        success(format!("Seeded {seeded} default gardens"));
    }

    //
    // 4. Internal log (non-blocking)
    //
    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 rVolunteerLog initialization completed!");
    Ok(())
}
