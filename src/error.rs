use thiserror::Error;

use crate::models::EntryKind;

#[derive(Error, Debug)]
pub enum HisaabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("No ledger entry with id: {0}")]
    UnknownEntry(String),

    #[error("Not allowed: {action} {kind} {id}")]
    NotAllowed {
        action: &'static str,
        kind: EntryKind,
        id: String,
    },

    #[error("No quick button with id: {0}")]
    UnknownQuickButton(String),

    #[error("Nothing selected to settle")]
    EmptySelection,
}

pub type Result<T> = std::result::Result<T, HisaabError>;
