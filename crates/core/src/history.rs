// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded history of successfully copied results.
//!
//! Each copy captures an immutable [`HistoryItem`]: the result string, the
//! active mode, and a snapshot of the mode-relevant input state so the
//! listing can be rebuilt later. The log keeps the 50 most recent items,
//! newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::{FieldValues, Mode, OilSpec, PartEntry};
use crate::format::ERROR_PLACEHOLDER;
use crate::state::EditorState;

/// Maximum number of retained history items. Older items are evicted.
pub const HISTORY_LIMIT: usize = 50;

/// Deep copy of the editable state captured at copy time.
///
/// Only the mode-relevant side is populated: parts items carry the shared
/// fields and entry list, oils items carry the oil specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub fields: FieldValues,
    #[serde(default)]
    pub entries: Vec<PartEntry>,
    #[serde(default)]
    pub oil: OilSpec,
}

impl Snapshot {
    /// Capture the mode-relevant input state.
    pub fn capture(state: &EditorState) -> Self {
        match state.mode() {
            Mode::Parts => Snapshot {
                fields: state.fields().clone(),
                entries: state.entries().to_vec(),
                oil: OilSpec::default(),
            },
            Mode::Oils => Snapshot {
                fields: FieldValues::default(),
                entries: Vec::new(),
                oil: state.oil().clone(),
            },
        }
    }
}

/// An immutable record of one previously produced result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Identifier (format: `h-{hash}`).
    pub id: String,
    /// Creation time, persisted as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// The copied result string.
    pub result: String,
    /// Mode active when the result was produced.
    pub mode: Mode,
    /// Input state that produced the result.
    pub snapshot: Snapshot,
}

impl HistoryItem {
    /// Creates an item capturing the given state's mode-relevant input.
    pub fn new(id: String, created_at: DateTime<Utc>, result: String, state: &EditorState) -> Self {
        HistoryItem {
            id,
            created_at,
            result,
            mode: state.mode(),
            snapshot: Snapshot::capture(state),
        }
    }
}

/// In-memory, newest-first, bounded list of history items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    items: Vec<HistoryItem>,
}

impl HistoryLog {
    pub fn new() -> Self {
        HistoryLog { items: Vec::new() }
    }

    /// Build a log from loaded items: sorted descending by timestamp and
    /// truncated to the retention limit.
    pub fn from_items(mut items: Vec<HistoryItem>) -> Self {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(HISTORY_LIMIT);
        HistoryLog { items }
    }

    /// Record a new item at the front, evicting the oldest beyond the limit.
    ///
    /// Empty results and the validation placeholder are never recorded;
    /// returns false when the item was skipped.
    pub fn record(&mut self, item: HistoryItem) -> bool {
        if item.result.is_empty() || item.result == ERROR_PLACEHOLDER {
            return false;
        }
        self.items.insert(0, item);
        self.items.truncate(HISTORY_LIMIT);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
