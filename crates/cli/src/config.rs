// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is stored in `config.toml` under the user config dir
//! (`~/.config/partline/` on Linux) and includes:
//! - `history_dir`: optional override for where the history file lives
//! - `clipboard`: set false to skip the system clipboard (headless use);
//!   results are still recorded in history
//!
//! A missing file means defaults. `PARTLINE_DATA_DIR` overrides the data
//! directory regardless of configuration, and `PARTLINE_NO_CLIPBOARD=1`
//! disables the clipboard for one invocation.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "partline";
const CONFIG_FILE_NAME: &str = "config.toml";
const HISTORY_FILE_NAME: &str = "history.jsonl";

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "PARTLINE_DATA_DIR";
/// Environment override disabling the system clipboard.
pub const NO_CLIPBOARD_ENV: &str = "PARTLINE_NO_CLIPBOARD";

/// User configuration loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Optional directory for the history file (absolute, or relative to
    /// the working directory).
    #[serde(default)]
    pub history_dir: Option<PathBuf>,
    /// Whether to write results to the system clipboard on `--copy`.
    #[serde(default = "default_clipboard")]
    pub clipboard: bool,
}

fn default_clipboard() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            history_dir: None,
            clipboard: true,
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(Config::default());
        };
        let path = config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the data directory: env override, then config, then the
    /// platform data dir.
    pub fn data_dir(&self) -> PathBuf {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &self.history_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    /// Path of the persisted history file.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir().join(HISTORY_FILE_NAME)
    }

    /// Whether `--copy` should touch the system clipboard.
    pub fn clipboard_enabled(&self) -> bool {
        if std::env::var(NO_CLIPBOARD_ENV).is_ok_and(|v| v == "1") {
            return false;
        }
        self.clipboard
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
