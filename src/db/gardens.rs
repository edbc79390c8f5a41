use crate::errors::AppResult;
use crate::models::garden::Garden;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_garden(row: &Row) -> Result<Garden> {
    Ok(Garden {
        row_index: row.get("id")?,
        name: row.get("name")?,
        location: row.get("location")?,
        active: row.get("active")?,
    })
}

/// All garden rows in table order.
pub fn load_gardens(conn: &Connection) -> AppResult<Vec<Garden>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, location, active FROM gardens ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_garden)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_garden(conn: &Connection, id: i64) -> AppResult<Option<Garden>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, location, active FROM gardens WHERE id = ?1")?;

    Ok(stmt.query_row([id], map_garden).optional()?)
}

pub fn insert_garden(conn: &Connection, name: &str, location: &str, active: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO gardens (name, location, active) VALUES (?1, ?2, ?3)",
        params![name, location, active],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows touched (0 when the id does not exist).
pub fn update_garden(conn: &Connection, garden: &Garden) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE gardens SET name = ?1, location = ?2, active = ?3 WHERE id = ?4",
        params![garden.name, garden.location, garden.active, garden.row_index],
    )?;
    Ok(n)
}

pub fn delete_garden(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM gardens WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn count_gardens(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM gardens", [], |row| row.get(0))?)
}
