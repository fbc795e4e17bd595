//! Unified application error type.
//! Parsing of user text never ends up here: malformed statements are
//! reported as skipped outcomes by the specification parser. Only storage
//! failures and policy violations are surfaced as `AppError`.

use chrono::NaiveDateTime;
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Event / roster errors
    // ---------------------------
    #[error("Event {0} not found")]
    EventNotFound(i64),

    #[error("User {user_id} is banned until {until}")]
    BannedUser { user_id: i64, until: NaiveDateTime },

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    #[error("Event title must not be empty")]
    InvalidTitle,

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
