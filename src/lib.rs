//! rVolunteerLog library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (row store, report engine, gardens, submissions, exports).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::AppResult;
use clap::Parser;

/// Environment variable consulted when `--user` is not given.
pub const USER_ENV: &str = "RVOLUNTEERLOG_USER";

/// Acting user: `--user`, then `$RVOLUNTEERLOG_USER`, else empty.
pub fn acting_user(cli: &Cli) -> String {
    cli.user
        .clone()
        .or_else(|| std::env::var(USER_ENV).ok())
        .unwrap_or_default()
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let user = acting_user(cli);

    match &cli.command {
        Commands::Init { .. } => crate::cli::commands::init::handle(cli),
        Commands::Config { .. } => crate::cli::commands::config::handle(&cli.command, cfg),
        Commands::Submit { .. } => crate::cli::commands::submit::handle(&cli.command, cfg),
        Commands::Gardens { .. } => crate::cli::commands::gardens::handle(&cli.command, cfg),
        Commands::Whoami { .. } => crate::cli::commands::whoami::handle(&cli.command, cfg, &user),
        Commands::Sample => crate::cli::commands::sample::handle(cfg),
        Commands::Log { .. } => crate::cli::commands::log::handle(&cli.command, cfg),

        // admin only
        Commands::Garden { .. } => {
            AuthLogic::require_admin(&user, cfg)?;
            crate::cli::commands::garden::handle(&cli.command, cfg)
        }
        Commands::Report { .. } => {
            AuthLogic::require_admin(&user, cfg)?;
            crate::cli::commands::report::handle(&cli.command, cfg)
        }
        Commands::Stats { .. } => {
            AuthLogic::require_admin(&user, cfg)?;
            crate::cli::commands::stats::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => {
            AuthLogic::require_admin(&user, cfg)?;
            crate::cli::commands::export::handle(&cli.command, cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    logging::init(&cfg.log_level);

    dispatch(&cli, &cfg)
}
