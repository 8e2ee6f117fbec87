// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text normalization for listing fields.
//!
//! Every editable text field funnels through the same two primitives:
//! whitespace-run collapsing and first-word capitalization. Field-specific
//! behavior is expressed as an explicit [`CasePolicy`] instead of per-field
//! branches.

/// Case transformation applied by [`normalize_field`] after collapsing
/// and trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePolicy {
    /// Uppercase the first letter of the first word; everything else is
    /// passed through unchanged. Default for all text fields.
    CapitalizeFirstWord,
    /// Lowercase every word's non-first characters; the first word's first
    /// character is uppercased, other words' first characters are untouched.
    LowercaseBody,
    /// Collapse and trim only, no case change. Used for entries flagged to
    /// keep their casing.
    Preserve,
}

/// Replace each run of 2+ whitespace characters with a single space.
///
/// Single whitespace characters pass through unchanged, so the function is
/// idempotent and never touches deliberate tabs or newlines.
pub fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run_first: Option<char> = None;
    let mut run_len = 0usize;

    for c in s.chars() {
        if c.is_whitespace() {
            run_len += 1;
            if run_len == 1 {
                run_first = Some(c);
            }
        } else {
            match (run_first.take(), run_len) {
                (Some(ws), 1) => out.push(ws),
                (Some(_), _) => out.push(' '),
                (None, _) => {}
            }
            run_len = 0;
            out.push(c);
        }
    }
    match (run_first, run_len) {
        (Some(ws), 1) => out.push(ws),
        (Some(_), _) => out.push(' '),
        (None, _) => {}
    }

    out
}

/// Uppercase only the first character of the first word.
///
/// The string is split on single spaces; tokens after the first pass through
/// with their casing intact, so at most the first character changes. A
/// leading space means the first token is empty and nothing changes.
pub fn capitalize_first_word(s: &str) -> String {
    match s.split_once(' ') {
        Some((first, rest)) => format!("{} {}", uppercase_first(first), rest),
        None => uppercase_first(s),
    }
}

/// True when the string contains a run of 2+ whitespace characters.
pub fn has_double_space(s: &str) -> bool {
    let mut prev_ws = false;
    for c in s.chars() {
        let ws = c.is_whitespace();
        if ws && prev_ws {
            return true;
        }
        prev_ws = ws;
    }
    false
}

/// Collapse, trim, and apply a case policy to one field value.
pub fn normalize_field(s: &str, policy: CasePolicy) -> String {
    let collapsed = collapse_spaces(s);
    let trimmed = collapsed.trim();
    match policy {
        CasePolicy::CapitalizeFirstWord => capitalize_first_word(trimmed),
        CasePolicy::LowercaseBody => lowercase_body(trimmed),
        CasePolicy::Preserve => trimmed.to_string(),
    }
}

fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => {
            let mut out: String = c.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

fn lowercase_body(s: &str) -> String {
    let words: Vec<String> = s
        .split(' ')
        .filter(|w| !w.is_empty())
        .enumerate()
        .map(|(i, word)| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let head: String = if i == 0 {
                        first.to_uppercase().collect()
                    } else {
                        first.to_string()
                    };
                    format!("{}{}", head, chars.as_str().to_lowercase())
                }
                None => String::new(),
            }
        })
        .collect();
    words.join(" ")
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
