// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable history storage.
//!
//! The history lives in a single JSONL file: one item per line, rewritten in
//! full on every mutation. Full rewrite keeps the retention bound explicit
//! and the file is capped at 50 lines. Reading tolerates a missing file and
//! skips malformed lines, reporting how many were dropped so the caller can
//! log the loss.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Result;
use crate::history::{HistoryItem, HistoryLog};

/// Result of loading the history file.
pub struct LoadedHistory {
    /// Items that parsed, sorted newest first and truncated to the limit.
    pub log: HistoryLog,
    /// Number of malformed lines that were skipped.
    pub skipped: usize,
}

/// Read the history file.
///
/// A missing file yields an empty log. Malformed lines are skipped and
/// counted, not fatal; an unreadable file is an error the caller may treat
/// as empty.
pub fn read_history(path: &Path) -> Result<LoadedHistory> {
    if !path.exists() {
        return Ok(LoadedHistory {
            log: HistoryLog::new(),
            skipped: 0,
        });
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut items = Vec::new();
    let mut skipped = 0;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<HistoryItem>(&line) {
            Ok(item) => items.push(item),
            Err(_) => skipped += 1,
        }
    }

    Ok(LoadedHistory {
        log: HistoryLog::from_items(items),
        skipped,
    })
}

/// Write the full log to the history file, replacing existing content.
///
/// Parent directories are created as needed; the file is fsynced.
pub fn write_history(path: &Path, log: &HistoryLog) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    for item in log.items() {
        let json = serde_json::to_string(item)?;
        writeln!(file, "{json}")?;
    }
    file.sync_all()?;

    Ok(())
}

/// Delete the history file if it exists.
pub fn remove_history(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
