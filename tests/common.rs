#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rvolunteerlog::db::initialize::init_db;
use rvolunteerlog::db::pool::DbPool;
use rvolunteerlog::db::store::append_raw_cells;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN: &str = "admin@example.org";

/// Isolated HOME + database for one CLI test.
pub struct TestEnv {
    pub home: PathBuf,
    pub db: String,
}

impl TestEnv {
    /// Fresh directory under the system temp dir; any previous run is wiped.
    pub fn new(name: &str) -> Self {
        let mut home = env::temp_dir();
        home.push(format!("{name}_rvolunteerlog_home"));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create test home");

        let db = home.join("volunteer.sqlite").to_string_lossy().to_string();
        Self { home, db }
    }

    /// Binary with HOME pointed at the test dir and no ambient user.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rvolunteerlog");
        cmd.env("HOME", &self.home)
            .env("APPDATA", &self.home)
            .env_remove("RVOLUNTEERLOG_USER")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Same as [`cmd`](Self::cmd) but acting as the configured admin.
    pub fn admin(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--user", ADMIN]);
        cmd
    }

    /// `init --admin` on the test database.
    pub fn init(&self) -> &Self {
        self.cmd()
            .args(["--db", &self.db, "init", "--admin", ADMIN])
            .assert()
            .success();
        self
    }

    /// Submit one entry through the public form.
    pub fn submit(&self, name: &str, start: &str, garden: &str, hours: &str) -> &Self {
        self.cmd()
            .args([
                "submit",
                "--name",
                name,
                "--email",
                &format!("{}@example.org", name.to_lowercase().replace(' ', ".")),
                "--start",
                start,
                "--garden",
                garden,
                "--hours",
                hours,
            ])
            .assert()
            .success();
        self
    }

    pub fn out(&self, name: &str) -> String {
        let p = self.home.join(name).to_string_lossy().to_string();
        fs::remove_file(&p).ok();
        p
    }
}

/// In-memory store with tables created.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Append rows given as positional cells in column order:
/// timestamp, name, email, start, end, gardens, hours, comments.
pub fn push_rows(pool: &DbPool, rows: &[&[Option<&str>]]) {
    for cells in rows {
        append_raw_cells(&pool.conn, cells).expect("append row");
    }
}

/// Shorthand for a well-formed row.
pub fn row<'a>(name: &'a str, start: &'a str, gardens: &'a str, hours: &'a str) -> [Option<&'a str>; 8] {
    [
        Some("2024-01-15T10:00:00Z"),
        Some(name),
        Some("someone@example.org"),
        Some(start),
        None,
        Some(gardens),
        Some(hours),
        None,
    ]
}
