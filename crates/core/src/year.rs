// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Year range validation and display.
//!
//! Years are entered as free text and accepted as exactly 2 or exactly 4
//! ASCII digits (or left empty). Display always shows the short 2-digit form.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Pre-compiled pattern. Using match with unreachable! since the pattern is
// hard-coded and known-valid.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^(?:\d{2}|\d{4})$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Why a year string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum YearError {
    #[error("Year must consist of 2 or 4 digits.")]
    Format,

    #[error("Invalid year.")]
    Range,
}

/// Validate a year string.
///
/// Empty or whitespace-only input is valid (the bound is simply absent).
/// 4-digit years must fall in 1900..=2100; 2-digit years are always in range.
pub fn validate_year(year: &str) -> Result<(), YearError> {
    if year.trim().is_empty() {
        return Ok(());
    }

    if !YEAR_RE.is_match(year) {
        return Err(YearError::Format);
    }

    let value: u32 = year.parse().map_err(|_| YearError::Format)?;
    if year.len() == 4 && !(1900..=2100).contains(&value) {
        return Err(YearError::Range);
    }
    if year.len() == 2 && value > 99 {
        return Err(YearError::Range);
    }

    Ok(())
}

/// Canonical display form: 4-digit years truncate to their last 2 digits,
/// 2-digit years pass through, empty stays empty.
pub fn display_year(year: &str) -> String {
    let trimmed = year.trim();
    if trimmed.len() == 4 {
        trimmed
            .get(2..)
            .map(str::to_string)
            .unwrap_or_else(|| trimmed.to_string())
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "year_tests.rs"]
mod tests;
