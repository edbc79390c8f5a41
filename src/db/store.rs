//! The volunteer-hours row store.
//!
//! The store is an ordered table of 8 positional text cells per row. The
//! report path only ever reads it through [`RowStore`]; the submission path
//! appends to it.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Column, NewEntry, RawRow};
use crate::utils::date::now_rfc3339;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row, params};

/// Read access to the entry table.
pub trait RowStore {
    /// Every entry row in store order, header excluded.
    fn read_rows(&self) -> AppResult<Vec<RawRow>>;
}

impl RowStore for DbPool {
    fn read_rows(&self) -> AppResult<Vec<RawRow>> {
        read_entry_rows(&self.conn)
    }
}

impl RowStore for Connection {
    fn read_rows(&self) -> AppResult<Vec<RawRow>> {
        read_entry_rows(self)
    }
}

fn select_sql() -> String {
    let cols: Vec<&str> = Column::ALL.iter().map(|c| c.sql_name()).collect();
    format!("SELECT {} FROM entries ORDER BY id ASC", cols.join(", "))
}

/// Any failure here means the table itself cannot be read.
pub fn read_entry_rows(conn: &Connection) -> AppResult<Vec<RawRow>> {
    let unavailable = |e: rusqlite::Error| AppError::StoreUnavailable(e.to_string());

    let mut stmt = conn.prepare(&select_sql()).map_err(unavailable)?;
    let rows = stmt.query_map([], map_raw_row).map_err(unavailable)?;

    let mut out = Vec::new();
    for (i, r) in rows.enumerate() {
        let cells = r.map_err(unavailable)?;
        out.push(RawRow::new(i + 1, cells));
    }
    Ok(out)
}

/// Cells are read as whatever SQLite holds and rendered as text.
fn map_raw_row(row: &Row) -> rusqlite::Result<Vec<Option<String>>> {
    let mut cells = Vec::with_capacity(Column::COUNT);
    for col in Column::ALL {
        let cell = match row.get_ref(col.index())? {
            ValueRef::Null => None,
            ValueRef::Integer(i) => Some(i.to_string()),
            ValueRef::Real(f) => Some(f.to_string()),
            ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Some(String::from_utf8_lossy(b).into_owned()),
        };
        cells.push(cell);
    }
    Ok(cells)
}

/// Append a validated entry; the timestamp is set here, never by the caller.
pub fn append_entry(conn: &Connection, entry: &NewEntry) -> AppResult<i64> {
    let [name, email, start, end, gardens, hours, comments] = entry.cells();

    conn.execute(
        "INSERT INTO entries
            (timestamp, volunteer_name, email, start_date, end_date, gardens, hours, comments)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![now_rfc3339(), name, email, start, end, gardens, hours, comments],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Append a row of raw cells as-is (missing trailing cells are NULL).
/// Used by imports and tests that need to store malformed data.
pub fn append_raw_cells(conn: &Connection, cells: &[Option<&str>]) -> AppResult<i64> {
    let cell = |c: Column| cells.get(c.index()).copied().flatten();

    conn.execute(
        "INSERT INTO entries
            (timestamp, volunteer_name, email, start_date, end_date, gardens, hours, comments)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            cell(Column::Timestamp),
            cell(Column::VolunteerName),
            cell(Column::Email),
            cell(Column::StartDate),
            cell(Column::EndDate),
            cell(Column::Gardens),
            cell(Column::Hours),
            cell(Column::Comments),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?)
}
