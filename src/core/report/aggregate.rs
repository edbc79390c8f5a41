use crate::models::entry::VolunteerEntry;
use crate::models::report::ReportSummary;

/// Running totals over the included entries. Hours are summed in the order
/// entries are added, so a fixed input order always gives the same total.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregator {
    total_hours: f64,
    total_entries: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: &VolunteerEntry) {
        self.total_hours += entry.hours;
        self.total_entries += 1;
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total_hours: self.total_hours,
            total_entries: self.total_entries,
        }
    }
}

pub fn aggregate<'a, I>(entries: I) -> ReportSummary
where
    I: IntoIterator<Item = &'a VolunteerEntry>,
{
    let mut agg = Aggregator::new();
    for e in entries {
        agg.add(e);
    }
    agg.summary()
}
