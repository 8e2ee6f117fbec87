// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pl_core::{format_result, store, EditorState};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_item;
use crate::error::{Error, Result};

use super::{deliver, load_log};

pub fn list(limit: Option<usize>, output: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let log = load_log(&config);
    let shown = match limit {
        Some(n) => &log.items()[..n.min(log.len())],
        None => log.items(),
    };

    match output {
        OutputFormat::Text => {
            if shown.is_empty() {
                println!("No history");
            } else {
                for item in shown {
                    println!("{}", format_item(item));
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(shown)?),
    }

    Ok(())
}

pub fn restore(id: &str, copy: bool, output: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let log = load_log(&config);
    let item = log
        .get(id)
        .ok_or_else(|| Error::HistoryItemNotFound(id.to_string()))?;

    let mut state = EditorState::new();
    state.restore(item);
    let result = format_result(&state);
    deliver(&config, &state, result, copy, output)
}

pub fn clear() -> Result<()> {
    let config = Config::load()?;
    store::remove_history(&config.history_path())?;
    println!("History cleared");
    Ok(())
}
