use crate::errors::AppResult;
use rusqlite::Connection;

/// Every cell of `entries` is nullable text: the table mirrors a
/// spreadsheet and may hold anything. Typing happens on read.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp       TEXT,
        volunteer_name  TEXT,
        email           TEXT,
        start_date      TEXT,
        end_date        TEXT,
        gardens         TEXT,
        hours           TEXT,
        comments        TEXT
    );

    CREATE TABLE IF NOT EXISTS gardens (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        name      TEXT NOT NULL,
        location  TEXT NOT NULL DEFAULT '',
        active    TEXT NOT NULL DEFAULT 'Yes'
    );

    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS outbox (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at TEXT NOT NULL,
        recipient  TEXT NOT NULL,
        subject    TEXT NOT NULL,
        body       TEXT NOT NULL
    );
"#;

/// Create the tables if they are missing. Safe to call on every write path.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
