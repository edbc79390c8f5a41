use crate::config::Config;
use crate::db::gardens::{
    count_gardens, delete_garden, insert_garden, load_garden, load_gardens, update_garden,
};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::garden::{ACTIVE_YES, ActiveGarden, DEFAULT_GARDENS, Garden, GardenUpdate};
use crate::utils::sanitize_input;
use std::time::{Duration, Instant};
use tracing::debug;

/// Read-through cache of the public garden choice list.
///
/// Owned by [`GardenLogic`]; every garden mutation goes through the same
/// `GardenLogic` and clears it. Reports never look at it.
#[derive(Debug, Clone)]
pub struct GardenCache {
    ttl: Duration,
    slot: Option<(Instant, Vec<ActiveGarden>)>,
}

impl GardenCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    pub fn get(&self) -> Option<&[ActiveGarden]> {
        match &self.slot {
            Some((stored_at, gardens)) if stored_at.elapsed() < self.ttl => Some(gardens),
            _ => None,
        }
    }

    pub fn put(&mut self, gardens: Vec<ActiveGarden>) {
        self.slot = Some((Instant::now(), gardens));
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn is_warm(&self) -> bool {
        self.get().is_some()
    }
}

pub struct GardenLogic {
    cache: GardenCache,
}

impl GardenLogic {
    pub fn new(cache_ttl: Duration) -> Self {
        Self {
            cache: GardenCache::new(cache_ttl),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Duration::from_secs(cfg.garden_cache_ttl_secs))
    }

    pub fn cache(&self) -> &GardenCache {
        &self.cache
    }

    /// Active gardens for the public form, served from cache when warm.
    pub fn list_active(&mut self, pool: &DbPool) -> AppResult<Vec<ActiveGarden>> {
        if let Some(cached) = self.cache.get() {
            debug!(count = cached.len(), "garden list served from cache");
            return Ok(cached.to_vec());
        }

        let active: Vec<ActiveGarden> = load_gardens(&pool.conn)?
            .iter()
            .filter(|g| g.is_active())
            .map(Garden::to_choice)
            .collect();

        self.cache.put(active.clone());
        Ok(active)
    }

    /// Every garden row, active or not (admin view).
    pub fn list_all(&self, pool: &DbPool) -> AppResult<Vec<Garden>> {
        load_gardens(&pool.conn)
    }

    pub fn add(&mut self, pool: &DbPool, name: &str, location: &str) -> AppResult<Garden> {
        let name = sanitize_input(name);
        if name.is_empty() {
            return Err(AppError::MissingField("name"));
        }
        let location = sanitize_input(location);

        let id = insert_garden(&pool.conn, &name, &location, ACTIVE_YES)?;
        self.cache.invalidate();

        ttlog_quiet(&pool.conn, "garden_add", &name, "Garden added successfully");

        Ok(Garden {
            row_index: id,
            name,
            location,
            active: ACTIVE_YES.to_string(),
        })
    }

    /// Overwrite the given fields of a garden row.
    pub fn update(&mut self, pool: &DbPool, id: i64, changes: &GardenUpdate) -> AppResult<Garden> {
        let mut garden = load_garden(&pool.conn, id)?.ok_or(AppError::GardenNotFound(id))?;

        if let Some(name) = &changes.name {
            garden.name = sanitize_input(name);
        }
        if let Some(location) = &changes.location {
            garden.location = sanitize_input(location);
        }
        if let Some(active) = &changes.active {
            garden.active = sanitize_input(active);
        }

        if update_garden(&pool.conn, &garden)? == 0 {
            return Err(AppError::GardenNotFound(id));
        }
        self.cache.invalidate();

        ttlog_quiet(
            &pool.conn,
            "garden_update",
            &garden.name,
            &format!("Garden {} updated (active: {})", id, garden.active),
        );

        Ok(garden)
    }

    /// Hard delete. Soft delete is an update of the active flag.
    pub fn delete(&mut self, pool: &DbPool, id: i64) -> AppResult<()> {
        if delete_garden(&pool.conn, id)? == 0 {
            return Err(AppError::GardenNotFound(id));
        }
        self.cache.invalidate();

        ttlog_quiet(
            &pool.conn,
            "garden_delete",
            &id.to_string(),
            "Garden deleted successfully",
        );
        Ok(())
    }

    /// Fill an empty gardens table with the default list. Returns how many
    /// rows were inserted.
    pub fn seed_defaults(&mut self, pool: &DbPool) -> AppResult<usize> {
        if count_gardens(&pool.conn)? > 0 {
            return Ok(0);
        }

        for name in DEFAULT_GARDENS {
            insert_garden(&pool.conn, name, "", ACTIVE_YES)?;
        }
        self.cache.invalidate();

        ttlog_quiet(
            &pool.conn,
            "seed",
            "gardens",
            &format!("Seeded {} default gardens", DEFAULT_GARDENS.len()),
        );
        Ok(DEFAULT_GARDENS.len())
    }
}
