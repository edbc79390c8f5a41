//! Report generation: read the whole row table, normalize every row, keep
//! the ones matching the filter and total them.

pub mod aggregate;
pub mod filter;
pub mod normalize;

use crate::db::store::RowStore;
use crate::errors::AppResult;
use crate::models::entry::RawRow;
use crate::models::report::{ReportFilter, ReportOutcome, ReportResult};
use aggregate::Aggregator;
use filter::CompiledFilter;
use normalize::normalize_row;
use tracing::{debug, error, info};

pub struct ReportLogic;

impl ReportLogic {
    /// Run a report and wrap it in the success/failure envelope.
    /// Nothing escapes this boundary: a store failure becomes
    /// `success: false` with a message and no partial data.
    pub fn generate<S: RowStore + ?Sized>(store: &S, filter: &ReportFilter) -> ReportOutcome {
        info!(?filter, "report generation start");

        match Self::run(store, filter) {
            Ok(result) => {
                info!(
                    entries = result.summary.total_entries,
                    hours = result.summary.total_hours,
                    "report generation end"
                );
                ReportOutcome::ok(result)
            }
            Err(e) => {
                error!(error = %e, "report generation failed");
                ReportOutcome::failed(format!("Error generating report: {e}"))
            }
        }
    }

    /// Read the store and build the report; store errors are returned.
    pub fn run<S: RowStore + ?Sized>(store: &S, filter: &ReportFilter) -> AppResult<ReportResult> {
        let rows = store.read_rows()?;
        debug!(rows = rows.len(), "rows retrieved");
        Ok(Self::build(&rows, filter))
    }

    /// Pure pass over already-read rows. Store order is preserved.
    pub fn build(rows: &[RawRow], filter: &ReportFilter) -> ReportResult {
        let compiled = CompiledFilter::compile(filter);
        let mut agg = Aggregator::new();
        let mut data = Vec::new();

        for row in rows {
            let Some(entry) = normalize_row(row) else {
                continue;
            };

            let reasons = compiled.reasons(&entry);
            if !reasons.is_empty() {
                debug!(row = row.position, ?reasons, "row filtered out");
                continue;
            }

            agg.add(&entry);
            data.push(entry);
        }

        ReportResult {
            data,
            summary: agg.summary(),
        }
    }
}
