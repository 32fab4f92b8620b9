//! Unified application error type.
//! All modules (core, timeline, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    // ---------------------------
    // Calculation errors
    // ---------------------------
    #[error("Invalid interval: end time {end} must be after start time {start}")]
    InvalidInterval { start: String, end: String },

    #[error("Unknown school: {0}")]
    UnknownSchool(String),

    #[error("Invalid bell schedule: {0}")]
    InvalidSchedule(String),

    // ---------------------------
    // Timeline
    // ---------------------------
    #[error("Drag rejected: {0}")]
    DragRejected(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
