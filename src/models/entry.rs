use chrono::NaiveDateTime;
use serde::Serialize;

/// Positional columns of the `entries` table, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Timestamp,
    VolunteerName,
    Email,
    StartDate,
    EndDate,
    Gardens,
    Hours,
    Comments,
}

impl Column {
    pub const COUNT: usize = 8;

    pub const ALL: [Column; Column::COUNT] = [
        Column::Timestamp,
        Column::VolunteerName,
        Column::Email,
        Column::StartDate,
        Column::EndDate,
        Column::Gardens,
        Column::Hours,
        Column::Comments,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Header label, as shown on the first row of the original sheet.
    pub fn header(self) -> &'static str {
        match self {
            Column::Timestamp => "Timestamp",
            Column::VolunteerName => "Volunteer Name",
            Column::Email => "Email",
            Column::StartDate => "Start Date",
            Column::EndDate => "End Date",
            Column::Gardens => "Gardens",
            Column::Hours => "Hours",
            Column::Comments => "Comments",
        }
    }

    /// SQL column name in the `entries` table.
    pub fn sql_name(self) -> &'static str {
        match self {
            Column::Timestamp => "timestamp",
            Column::VolunteerName => "volunteer_name",
            Column::Email => "email",
            Column::StartDate => "start_date",
            Column::EndDate => "end_date",
            Column::Gardens => "gardens",
            Column::Hours => "hours",
            Column::Comments => "comments",
        }
    }
}

/// One untyped row as handed out by the row store.
///
/// Cells are kept exactly as stored; the normalizer is the only place that
/// turns them into a [`VolunteerEntry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 1-based position of the row in the store (header excluded).
    pub position: usize,
    pub cells: Vec<Option<String>>,
}

impl RawRow {
    pub fn new(position: usize, cells: Vec<Option<String>>) -> Self {
        Self { position, cells }
    }

    /// Build a row from plain strings. Empty strings become absent cells.
    pub fn from_strs(position: usize, cells: &[&str]) -> Self {
        let cells = cells
            .iter()
            .map(|c| {
                if c.is_empty() {
                    None
                } else {
                    Some((*c).to_string())
                }
            })
            .collect();
        Self { position, cells }
    }

    pub fn cell(&self, column: Column) -> Option<&str> {
        self.cells.get(column.index()).and_then(|c| c.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A normalized volunteer-hours submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerEntry {
    #[serde(skip)]
    pub position: usize,
    pub timestamp: String,
    pub volunteer_name: String,
    pub email: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub gardens: String,
    pub hours: f64,
    pub comments: String,
}

impl VolunteerEntry {
    pub fn start_date_str(&self) -> String {
        format_entry_date(&self.start_date)
    }

    pub fn end_date_str(&self) -> String {
        format_entry_date(&self.end_date)
    }
}

/// Dates without a time component print as `YYYY-MM-DD`.
fn format_entry_date(dt: &NaiveDateTime) -> String {
    if dt.time() == chrono::NaiveTime::MIN {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// A validated entry ready to be appended to the store.
/// The timestamp is assigned by the store at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub volunteer_name: String,
    pub email: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub gardens: String,
    pub hours: f64,
    pub comments: String,
}

impl NewEntry {
    /// Cells in storage order, minus the timestamp.
    pub fn cells(&self) -> [String; Column::COUNT - 1] {
        [
            self.volunteer_name.clone(),
            self.email.clone(),
            self.start_date.format("%Y-%m-%d").to_string(),
            self.end_date.format("%Y-%m-%d").to_string(),
            self.gardens.clone(),
            self.hours.to_string(),
            self.comments.clone(),
        ]
    }
}
