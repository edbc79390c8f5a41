use super::report::Envelope;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerStats {
    pub total_volunteers: usize,
    pub total_hours: f64,
    pub total_entries: usize,
    pub average_hours: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatsPayload {
    pub stats: VolunteerStats,
}

pub type StatsOutcome = Envelope<StatsPayload>;
