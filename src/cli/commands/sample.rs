use crate::config::Config;
use crate::core::sample::SampleLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = super::open_store(cfg)?;
    let added = SampleLogic::add_sample_entries(&pool)?;
    success(format!("Added {added} sample entries"));
    Ok(())
}
