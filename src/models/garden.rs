use serde::{Deserialize, Serialize};

pub const ACTIVE_YES: &str = "Yes";
pub const ACTIVE_NO: &str = "No";

/// Gardens seeded into an empty `gardens` table.
pub const DEFAULT_GARDENS: [&str; 13] = [
    "Harcourt/Canton",
    "Holyoke area",
    "Follen/Braddock Corner",
    "Follen and Braddock Hills/Lawyer's Alley",
    "Newton 4 Corners",
    "Durham/Rutland Gardens",
    "Greenwich Area Gardens",
    "Claremont/Blackwood Area",
    "Wellington",
    "Rose Garden",
    "Meadow",
    "Mass Ave Gardens",
    "Northampton/Camden",
];

/// Row of the `gardens` reference table, as seen by the admin view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub row_index: i64,
    pub name: String,
    pub location: String,
    pub active: String,
}

impl Garden {
    /// Only the exact flag "Yes" puts a garden on the public choice list.
    pub fn is_active(&self) -> bool {
        self.active == ACTIVE_YES
    }

    pub fn to_choice(&self) -> ActiveGarden {
        ActiveGarden {
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }
}

/// Public choice-list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveGarden {
    pub name: String,
    pub location: String,
}

/// Partial update for a garden row; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GardenUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub active: Option<String>,
}
