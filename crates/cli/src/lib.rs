// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! plrs - Listing formatter library behind the `partline` CLI.
//!
//! Assembles standardized product-listing lines for automotive parts and
//! motor oils from structured fields, copies them to the clipboard, and
//! keeps a bounded, persisted history of successfully copied results.
//!
//! # Main Components
//!
//! - [`pl_core::EditorState`] - the editable listing state and validation
//! - [`pl_core::format_result`] - result assembly
//! - [`Config`] - user configuration (history location, clipboard switch)
//! - [`Error`] - error types for all operations

mod cli;
mod clipboard;
pub mod colors;
mod commands;
mod display;
mod id;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Parts {
            name,
            brand,
            entries,
            copy,
            output,
        } => commands::parts::run(name, brand, &entries, copy, output),
        Command::Oil {
            oil_type,
            brand,
            viscosity,
            specification,
            volume,
            copy,
            output,
        } => commands::oil::run(
            oil_type,
            brand,
            viscosity,
            specification,
            volume,
            copy,
            output,
        ),
        Command::History { limit, output } => commands::history::list(limit, output),
        Command::Restore { id, copy, output } => commands::history::restore(&id, copy, output),
        Command::Clear => commands::history::clear(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "partline", &mut std::io::stdout());
            Ok(())
        }
    }
}
