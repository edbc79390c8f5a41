use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::resolve_output_path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        // opened writable so the export lands in the log
        super::ensure_store_exists(cfg)?;
        let pool = DbPool::new(&cfg.database)?;

        let path = resolve_output_path(file)?;
        ExportLogic::export(&pool, &filter.to_filter(), *format, &path, *force)?;
    }
    Ok(())
}
