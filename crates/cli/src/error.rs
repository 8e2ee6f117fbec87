// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the plrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("history item not found: {0}\n  hint: run 'partline history' to list stored items")]
    HistoryItemNotFound(String),

    #[error("invalid entry '{spec}': {reason}\n  hint: format is car-brand:model:year-from:year-to[:keep]")]
    InvalidEntrySpec { spec: String, reason: String },

    #[error("entry not found: {0}")]
    EntryNotFound(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for plrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<pl_core::Error> for Error {
    fn from(e: pl_core::Error) -> Self {
        match e {
            pl_core::Error::EntryNotFound(id) => Error::EntryNotFound(id),
            pl_core::Error::Io(e) => Error::Io(e),
            pl_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
