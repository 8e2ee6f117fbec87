// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pl-core: Shared library for the partline listing formatter
//!
//! This crate provides the data model, text normalization, validation,
//! result assembly, and history primitives used by the partline CLI.

pub mod entry;
pub mod error;
pub mod format;
pub mod history;
pub mod normalize;
pub mod state;
pub mod store;
pub mod year;

pub use entry::{FieldValues, Mode, OilField, OilSpec, PartEntry};
pub use error::{Error, Result};
pub use format::{format_result, group_entries, ERROR_PLACEHOLDER};
pub use history::{HistoryItem, HistoryLog, Snapshot, HISTORY_LIMIT};
pub use normalize::CasePolicy;
pub use state::{EditorState, Violation};
