// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pl_core::{format_result, EditorState, Mode, OilField};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

use super::deliver;

pub fn run(
    oil_type: Option<String>,
    brand: Option<String>,
    viscosity: Option<String>,
    specification: Option<String>,
    volume: Option<String>,
    copy: bool,
    output: OutputFormat,
) -> Result<()> {
    let config = Config::load()?;
    let state = build_state(oil_type, brand, viscosity, specification, volume);
    let result = format_result(&state);
    deliver(&config, &state, result, copy, output)
}

/// Build the oils editor state from command-line input.
pub(crate) fn build_state(
    oil_type: Option<String>,
    brand: Option<String>,
    viscosity: Option<String>,
    specification: Option<String>,
    volume: Option<String>,
) -> EditorState {
    let mut state = EditorState::new();
    state.set_mode(Mode::Oils);

    let values = [
        (OilField::Type, oil_type),
        (OilField::Brand, brand),
        (OilField::Viscosity, viscosity),
        (OilField::Specification, specification),
        (OilField::Volume, volume),
    ];
    for (field, value) in values {
        if let Some(value) = value {
            state.set_oil(field, &value);
        }
    }

    state
}

#[cfg(test)]
#[path = "oil_tests.rs"]
mod tests;
