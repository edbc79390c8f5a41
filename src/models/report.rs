use super::entry::VolunteerEntry;
use serde::{Deserialize, Serialize};

/// Per-call report criteria. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garden: Option<String>,
}

impl ReportFilter {
    pub fn between(start: &str, end: &str) -> Self {
        Self {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            ..Self::default()
        }
    }

    pub fn with_volunteer(mut self, name: &str) -> Self {
        self.volunteer_name = Some(name.to_string());
        self
    }

    pub fn with_garden(mut self, garden: &str) -> Self {
        self.garden = Some(garden.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_hours: f64,
    pub total_entries: usize,
}

/// Matching entries in store order plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportResult {
    pub data: Vec<VolunteerEntry>,
    pub summary: ReportSummary,
}

/// Response shape shared by the admin operations.
///
/// Serializes as `{"success": true, ...payload}` or
/// `{"success": false, "message": "..."}`; callers treat `success` as the
/// only error signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.payload) {
            (true, Some(p)) => Ok(p),
            _ => Err(self.message.unwrap_or_else(|| "unknown failure".to_string())),
        }
    }
}

pub type ReportOutcome = Envelope<ReportResult>;
