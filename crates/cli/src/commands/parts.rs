// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pl_core::{format_result, EditorState, Mode};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};

use super::deliver;

pub fn run(
    name: Option<String>,
    brand: Option<String>,
    entries: &[String],
    copy: bool,
    output: OutputFormat,
) -> Result<()> {
    let config = Config::load()?;
    let state = build_state(name.as_deref(), brand.as_deref(), entries)?;
    let result = format_result(&state);
    deliver(&config, &state, result, copy, output)
}

/// Build the parts editor state from command-line input.
pub(crate) fn build_state(
    name: Option<&str>,
    brand: Option<&str>,
    entries: &[String],
) -> Result<EditorState> {
    let mut state = EditorState::new();
    state.set_mode(Mode::Parts);

    if let Some(name) = name {
        state.set_name(name);
    }
    if let Some(brand) = brand {
        state.set_brand(brand);
    }

    for spec in entries {
        let parsed = parse_entry(spec)?;
        let id = state.add_entry();
        // keep flag first so the text setters honor it
        state.set_keep_uppercase(&id, parsed.keep)?;
        state.set_car_brand(&id, &parsed.car_brand)?;
        state.set_model(&id, &parsed.model)?;
        state.set_year_from(&id, &parsed.year_from)?;
        state.set_year_to(&id, &parsed.year_to)?;
    }

    Ok(state)
}

/// One parsed `--entry` value.
struct EntryArg {
    car_brand: String,
    model: String,
    year_from: String,
    year_to: String,
    keep: bool,
}

/// Parse the colon-separated entry syntax:
/// `car-brand:model:year-from:year-to[:keep]`, trailing segments optional.
fn parse_entry(spec: &str) -> Result<EntryArg> {
    let segments: Vec<&str> = spec.split(':').collect();

    let (fields, keep) = match segments.len() {
        0..=4 => (segments.as_slice(), false),
        5 => {
            if segments[4] != "keep" {
                return Err(Error::InvalidEntrySpec {
                    spec: spec.to_string(),
                    reason: format!("unknown flag '{}'", segments[4]),
                });
            }
            (&segments[..4], true)
        }
        _ => {
            return Err(Error::InvalidEntrySpec {
                spec: spec.to_string(),
                reason: "too many segments".to_string(),
            })
        }
    };

    let get = |i: usize| fields.get(i).map(|s| s.to_string()).unwrap_or_default();
    Ok(EntryArg {
        car_brand: get(0),
        model: get(1),
        year_from: get(2),
        year_to: get(3),
        keep,
    })
}

#[cfg(test)]
#[path = "parts_tests.rs"]
mod tests;
