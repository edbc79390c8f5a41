//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that both the CLI
//! and the report envelope can turn any failure into a single message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Row store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Could not access volunteer hours store: {0}")]
    StoreUnavailable(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Gardens
    // ---------------------------
    #[error("Garden not found: row {0}")]
    GardenNotFound(i64),

    // ---------------------------
    // Admin access
    // ---------------------------
    #[error("Access denied - admin privileges required (current user: '{0}')")]
    AccessDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Serialization / export
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("{0}")]
    Report(String),

    // ---------------------------
    // Notifications
    // ---------------------------
    #[error("Notification error: {0}")]
    Notify(String),
}

pub type AppResult<T> = Result<T, AppError>;
