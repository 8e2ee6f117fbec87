// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations and the shared result-delivery path.

pub(crate) mod history;
pub(crate) mod oil;
pub(crate) mod parts;

use chrono::Utc;

use pl_core::{store, EditorState, HistoryItem, HistoryLog, ERROR_PLACEHOLDER};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::{clipboard, id};

/// Load the persisted history, degrading to an empty log on failure.
///
/// Read errors and malformed lines are logged, never fatal: a broken
/// history file must not block formatting.
pub(crate) fn load_log(config: &Config) -> HistoryLog {
    let path = config.history_path();
    match store::read_history(&path) {
        Ok(loaded) => {
            if loaded.skipped > 0 {
                tracing::warn!(
                    "skipped {} malformed history entries in {}",
                    loaded.skipped,
                    path.display()
                );
            }
            loaded.log
        }
        Err(e) => {
            tracing::warn!("failed to read history from {}: {}", path.display(), e);
            HistoryLog::new()
        }
    }
}

/// Print the assembled result and, on request, copy and record it.
pub(crate) fn deliver(
    config: &Config,
    state: &EditorState,
    result: String,
    copy: bool,
    output: OutputFormat,
) -> Result<()> {
    match output {
        OutputFormat::Text => println!("{}", result),
        OutputFormat::Json => println!("{}", serde_json::json!({ "result": result })),
    }

    if result == ERROR_PLACEHOLDER {
        for violation in state.validate() {
            eprintln!("  {}", violation);
        }
    }

    if copy {
        copy_and_record(config, state, &result)?;
    }
    Ok(())
}

/// Copy the result to the clipboard and append it to history.
///
/// Blocked and empty results are never copied or recorded. A clipboard
/// failure is surfaced as a warning and skips the history record; there is
/// no retry.
fn copy_and_record(config: &Config, state: &EditorState, result: &str) -> Result<()> {
    if result.is_empty() || result == ERROR_PLACEHOLDER {
        eprintln!("nothing to copy");
        return Ok(());
    }

    if config.clipboard_enabled() {
        match clipboard::copy(result) {
            Ok(()) => eprintln!("Copied to clipboard."),
            Err(e) => {
                tracing::warn!("{e}");
                eprintln!("warning: {e}");
                return Ok(());
            }
        }
    } else {
        tracing::debug!("clipboard disabled; recording history without copying");
    }

    let created_at = Utc::now();
    let item = HistoryItem::new(
        id::history_id(result, &created_at),
        created_at,
        result.to_string(),
        state,
    );

    let mut log = load_log(config);
    if log.record(item) {
        store::write_history(&config.history_path(), &log)?;
    }
    Ok(())
}
