// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Editable listing state and its validation pass.
//!
//! `EditorState` owns everything a result is assembled from. Mutators apply
//! the same per-change normalization the original form applied on every
//! keystroke: whitespace runs collapse and the first word is capitalized
//! (unless the entry is flagged to keep its casing). Years are stored raw
//! and validated, never rewritten.

use crate::entry::{FieldValues, Mode, OilField, OilSpec, PartEntry};
use crate::error::{Error, Result};
use crate::history::HistoryItem;
use crate::normalize::{capitalize_first_word, collapse_spaces, has_double_space};
use crate::year::validate_year;

/// Message attached to double-space violations.
const DOUBLE_SPACE_MESSAGE: &str = "Double space detected.";

/// One validation finding, keyed by field name or `{entry-id}.{field}`.
///
/// Any violation anywhere blocks result assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub key: String,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// All editable state for one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    mode: Mode,
    fields: FieldValues,
    entries: Vec<PartEntry>,
    oil: OilSpec,
    next_entry: u64,
}

impl EditorState {
    /// Fresh state: parts mode, empty fields, one empty entry.
    pub fn new() -> Self {
        EditorState {
            mode: Mode::Parts,
            fields: FieldValues::default(),
            entries: vec![PartEntry::new("e1".to_string())],
            oil: OilSpec::default(),
            next_entry: 2,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn entries(&self) -> &[PartEntry] {
        &self.entries
    }

    pub fn oil(&self) -> &OilSpec {
        &self.oil
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Set the free-text product name, with per-change normalization.
    pub fn set_name(&mut self, value: &str) {
        self.fields.name = text_input(value, false);
    }

    /// Set the free-text manufacturer brand, with per-change normalization.
    pub fn set_brand(&mut self, value: &str) {
        self.fields.brand = text_input(value, false);
    }

    /// Append a new empty entry and return its identifier.
    pub fn add_entry(&mut self) -> String {
        let id = format!("e{}", self.next_entry);
        self.next_entry += 1;
        self.entries.push(PartEntry::new(id.clone()));
        id
    }

    /// Remove an entry by identifier.
    ///
    /// Returns false without changing anything when only one entry remains
    /// or when the identifier does not exist.
    pub fn remove_entry(&mut self, id: &str) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn set_car_brand(&mut self, id: &str, value: &str) -> Result<()> {
        let entry = self.entry_mut(id)?;
        entry.car_brand = text_input(value, entry.keep_uppercase);
        Ok(())
    }

    pub fn set_model(&mut self, id: &str, value: &str) -> Result<()> {
        let entry = self.entry_mut(id)?;
        entry.model = text_input(value, entry.keep_uppercase);
        Ok(())
    }

    /// Years are stored as entered; validation reports on them separately.
    pub fn set_year_from(&mut self, id: &str, value: &str) -> Result<()> {
        self.entry_mut(id)?.year_from = value.to_string();
        Ok(())
    }

    pub fn set_year_to(&mut self, id: &str, value: &str) -> Result<()> {
        self.entry_mut(id)?.year_to = value.to_string();
        Ok(())
    }

    pub fn set_keep_uppercase(&mut self, id: &str, keep: bool) -> Result<()> {
        self.entry_mut(id)?.keep_uppercase = keep;
        Ok(())
    }

    /// Set one oil-specification field. Whitespace runs collapse; casing is
    /// kept as entered (the oil form never capitalized).
    pub fn set_oil(&mut self, field: OilField, value: &str) {
        let collapsed = collapse_spaces(value);
        match field {
            OilField::Type => self.oil.oil_type = collapsed,
            OilField::Brand => self.oil.brand = collapsed,
            OilField::Viscosity => self.oil.viscosity = collapsed,
            OilField::Specification => self.oil.specification = collapsed,
            OilField::Volume => self.oil.volume = collapsed,
        }
    }

    /// Run the full validation pass: per-entry year checks plus double-space
    /// detection on every text field.
    ///
    /// The normalizing mutators collapse whitespace runs on every change, so
    /// double-space findings only surface for state constructed around them,
    /// e.g. snapshots restored verbatim from the history file.
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();

        check_double_space(&mut out, "name", &self.fields.name);
        check_double_space(&mut out, "brand", &self.fields.brand);

        for entry in &self.entries {
            check_double_space(&mut out, &format!("{}.car_brand", entry.id), &entry.car_brand);
            check_double_space(&mut out, &format!("{}.model", entry.id), &entry.model);
            if let Err(err) = validate_year(&entry.year_from) {
                out.push(Violation {
                    key: format!("{}.year_from", entry.id),
                    message: err.to_string(),
                });
            }
            if let Err(err) = validate_year(&entry.year_to) {
                out.push(Violation {
                    key: format!("{}.year_to", entry.id),
                    message: err.to_string(),
                });
            }
        }

        for field in OilField::all() {
            let value = match field {
                OilField::Type => &self.oil.oil_type,
                OilField::Brand => &self.oil.brand,
                OilField::Viscosity => &self.oil.viscosity,
                OilField::Specification => &self.oil.specification,
                OilField::Volume => &self.oil.volume,
            };
            check_double_space(&mut out, &format!("oil.{}", field), value);
        }

        out
    }

    /// Replace all editable state with a history snapshot.
    ///
    /// Snapshot text is taken verbatim, not re-normalized. Restoring an oils
    /// item clears the shared name/brand fields (oils mode does not use
    /// them) and resets the entry list; restoring a parts item resets the
    /// oil specification.
    pub fn restore(&mut self, item: &HistoryItem) {
        self.mode = item.mode;
        match item.mode {
            Mode::Parts => {
                self.fields = item.snapshot.fields.clone();
                self.entries = item.snapshot.entries.clone();
                if self.entries.is_empty() {
                    self.entries.push(PartEntry::new("e1".to_string()));
                }
                self.oil = OilSpec::default();
            }
            Mode::Oils => {
                self.fields = FieldValues::default();
                self.entries = vec![PartEntry::new("e1".to_string())];
                self.oil = item.snapshot.oil.clone();
            }
        }
        self.next_entry = self
            .entries
            .iter()
            .filter_map(|e| e.id.strip_prefix('e').and_then(|n| n.parse::<u64>().ok()))
            .max()
            .unwrap_or(0)
            + 1;
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut PartEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::EntryNotFound(id.to_string()))
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-change normalization for free-text input: whitespace runs collapse,
/// and unless the entry keeps its casing, the first word is capitalized.
fn text_input(value: &str, keep_uppercase: bool) -> String {
    let collapsed = collapse_spaces(value);
    if keep_uppercase {
        collapsed
    } else {
        capitalize_first_word(&collapsed)
    }
}

fn check_double_space(out: &mut Vec<Violation>, key: &str, value: &str) {
    if has_double_space(value) {
        out.push(Violation {
            key: key.to_string(),
            message: DOUBLE_SPACE_MESSAGE.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
