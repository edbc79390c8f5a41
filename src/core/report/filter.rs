//! Report filter predicates.
//!
//! Each sub-predicate is pure and evaluated on its own; an entry is kept
//! when no applicable predicate rejects it. Predicates whose filter value is
//! missing or empty never reject.

use crate::models::entry::VolunteerEntry;
use crate::models::report::ReportFilter;
use crate::utils::date::{end_of_day, parse_date, start_of_day};
use crate::utils::text::contains_ci;
use chrono::NaiveDateTime;
use tracing::warn;

/// Why an entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    StartBeforeRange,
    EndAfterRange,
    NameMismatch,
    GardenMismatch,
}

/// Full-day inclusive window: `[start 00:00:00.000, end 23:59:59.999]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    pub fn reasons(&self, entry: &VolunteerEntry) -> Vec<FilterReason> {
        let mut out = Vec::new();
        if entry.start_date < self.start {
            out.push(FilterReason::StartBeforeRange);
        }
        if entry.end_date > self.end {
            out.push(FilterReason::EndAfterRange);
        }
        out
    }

    /// Containment, not overlap: the whole entry span must be inside.
    pub fn contains(&self, entry: &VolunteerEntry) -> bool {
        self.reasons(entry).is_empty()
    }
}

/// A [`ReportFilter`] with its dates parsed and its texts lowercased once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledFilter {
    pub window: Option<DateWindow>,
    name: Option<String>,
    garden: Option<String>,
}

impl CompiledFilter {
    pub fn compile(filter: &ReportFilter) -> Self {
        Self {
            window: date_window(filter),
            name: filter
                .volunteer_name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
            garden: filter
                .garden
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
        }
    }

    /// Every reason the entry is rejected; empty when it is included.
    pub fn reasons(&self, entry: &VolunteerEntry) -> Vec<FilterReason> {
        let mut out = self
            .window
            .map(|w| w.reasons(entry))
            .unwrap_or_default();

        if !self.name_matches(entry) {
            out.push(FilterReason::NameMismatch);
        }
        if !self.garden_matches(entry) {
            out.push(FilterReason::GardenMismatch);
        }
        out
    }

    pub fn matches(&self, entry: &VolunteerEntry) -> bool {
        self.window.is_none_or(|w| w.contains(entry))
            && self.name_matches(entry)
            && self.garden_matches(entry)
    }

    fn name_matches(&self, entry: &VolunteerEntry) -> bool {
        self.name
            .as_deref()
            .is_none_or(|n| contains_ci(&entry.volunteer_name, n))
    }

    /// Substring over the joined gardens text, so "rose" matches
    /// "Herb Garden, Rose Garden".
    fn garden_matches(&self, entry: &VolunteerEntry) -> bool {
        self.garden
            .as_deref()
            .is_none_or(|g| contains_ci(&entry.gardens, g))
    }
}

/// Convenience wrapper for one-off checks.
pub fn entry_matches(entry: &VolunteerEntry, filter: &ReportFilter) -> bool {
    CompiledFilter::compile(filter).matches(entry)
}

/// The date predicate only applies when both bounds parse. A lone bound or
/// a malformed one is reported and ignored.
fn date_window(filter: &ReportFilter) -> Option<DateWindow> {
    let start_raw = filter.start_date.as_deref().filter(|s| !s.is_empty());
    let end_raw = filter.end_date.as_deref().filter(|s| !s.is_empty());

    match (start_raw, end_raw) {
        (None, None) => None,
        (Some(s), Some(e)) => match (parse_date(s), parse_date(e)) {
            (Some(start), Some(end)) => Some(DateWindow {
                start: start_of_day(start),
                end: end_of_day(end),
            }),
            _ => {
                warn!(start = s, end = e, "ignoring malformed report date filter");
                None
            }
        },
        (Some(s), None) => {
            warn!(start = s, "date filter needs both bounds; ignoring start date");
            None
        }
        (None, Some(e)) => {
            warn!(end = e, "date filter needs both bounds; ignoring end date");
            None
        }
    }
}
