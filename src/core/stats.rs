use crate::db::store::RowStore;
use crate::errors::AppResult;
use crate::models::entry::{Column, RawRow};
use crate::models::stats::{StatsOutcome, StatsPayload, VolunteerStats};
use crate::utils::parse_hours;
use std::collections::HashSet;
use tracing::error;

pub struct StatsLogic;

impl StatsLogic {
    pub fn volunteer_stats<S: RowStore + ?Sized>(store: &S) -> StatsOutcome {
        match store.read_rows() {
            Ok(rows) => StatsOutcome::ok(StatsPayload {
                stats: Self::compute(&rows),
            }),
            Err(e) => {
                error!(error = %e, "error getting volunteer stats");
                StatsOutcome::failed(e.to_string())
            }
        }
    }

    pub fn try_volunteer_stats<S: RowStore + ?Sized>(store: &S) -> AppResult<VolunteerStats> {
        Ok(Self::compute(&store.read_rows()?))
    }

    /// Totals over every stored row, normalized or not: this is a raw count
    /// of what is in the store.
    pub fn compute(rows: &[RawRow]) -> VolunteerStats {
        if rows.is_empty() {
            return VolunteerStats::default();
        }

        let volunteers: HashSet<&str> = rows
            .iter()
            .map(|r| r.cell(Column::VolunteerName).unwrap_or_default())
            .collect();

        let total_hours: f64 = rows
            .iter()
            .map(|r| parse_hours(r.cell(Column::Hours)))
            .sum();

        let total_entries = rows.len();
        let average_hours = (total_hours / total_entries as f64 * 100.0).round() / 100.0;

        VolunteerStats {
            total_volunteers: volunteers.len(),
            total_hours,
            total_entries,
            average_hours,
        }
    }
}
