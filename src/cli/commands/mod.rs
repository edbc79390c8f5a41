pub mod config;
pub mod export;
pub mod garden;
pub mod gardens;
pub mod init;
pub mod log;
pub mod report;
pub mod sample;
pub mod stats;
pub mod submit;
pub mod whoami;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Open the store for a command that writes; tables are created on demand.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn ensure_store_exists(cfg: &Config) -> AppResult<()> {
    if Path::new(&cfg.database).exists() {
        Ok(())
    } else {
        Err(AppError::StoreUnavailable(format!(
            "database '{}' not found (run `rvolunteerlog init`)",
            cfg.database
        )))
    }
}

/// Open an existing store read-only, without creating it.
pub(crate) fn open_existing_store(cfg: &Config) -> AppResult<DbPool> {
    ensure_store_exists(cfg)?;
    DbPool::open_read_only(&cfg.database)
        .map_err(|e| AppError::StoreUnavailable(e.to_string()))
}
