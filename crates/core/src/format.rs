// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result assembly: grouping, concatenation, and the validation gate.
//!
//! Everything here is a pure function of the editor state. Entries group by
//! car brand in first-seen order; each brand prefixes its comma-joined model
//! strings; groups join with ", ". Any validation finding anywhere collapses
//! the whole result into a fixed placeholder until resolved.

use crate::entry::{Mode, PartEntry};
use crate::normalize::{collapse_spaces, normalize_field, CasePolicy};
use crate::state::EditorState;
use crate::year::{display_year, validate_year};

/// Fixed result substituted while any validation finding exists.
pub const ERROR_PLACEHOLDER: &str = "Please fix validation errors";

/// Suffix replacing year ranges in a brand group with a bad year.
const TAINT_SUFFIX: &str = "(validation error)";

/// Leading token of every oil listing.
const OIL_TOKEN: &str = "Масло";

/// One model row after normalization, with raw years kept for validation.
struct GroupedModel {
    model: String,
    from_display: String,
    to_display: String,
    raw_from: String,
    raw_to: String,
}

/// Group entries by car brand and render the combined model/year string.
///
/// Entries blank in both brand and model are discarded. A bad year on any
/// entry taints every model string in that brand group with the
/// `(validation error)` suffix; other groups render normally.
pub fn group_entries(entries: &[PartEntry]) -> String {
    let mut groups: Vec<(String, Vec<GroupedModel>)> = Vec::new();

    for entry in entries {
        let policy = if entry.keep_uppercase {
            CasePolicy::Preserve
        } else {
            CasePolicy::CapitalizeFirstWord
        };
        let brand = normalize_field(&entry.car_brand, policy);
        let model = normalize_field(&entry.model, policy);
        if brand.is_empty() && model.is_empty() {
            continue;
        }

        let idx = match groups.iter().position(|(key, _)| *key == brand) {
            Some(i) => i,
            None => {
                groups.push((brand, Vec::new()));
                groups.len() - 1
            }
        };
        if model.is_empty() {
            continue;
        }
        if let Some((_, models)) = groups.get_mut(idx) {
            models.push(GroupedModel {
                model,
                from_display: display_year(&entry.year_from),
                to_display: display_year(&entry.year_to),
                raw_from: entry.year_from.clone(),
                raw_to: entry.year_to.clone(),
            });
        }
    }

    let mut rendered_groups = Vec::with_capacity(groups.len());
    for (brand, models) in &groups {
        if models.is_empty() {
            if !brand.is_empty() {
                rendered_groups.push(brand.clone());
            }
            continue;
        }

        let tainted = models
            .iter()
            .any(|m| validate_year(&m.raw_from).is_err() || validate_year(&m.raw_to).is_err());

        let rendered: Vec<String> = models
            .iter()
            .map(|m| {
                if tainted {
                    format!("{} {}", m.model, TAINT_SUFFIX)
                } else {
                    render_span(m)
                }
            })
            .collect();
        let joined = rendered.join(", ");

        if brand.is_empty() {
            rendered_groups.push(joined);
        } else {
            rendered_groups.push(format!("{} {}", brand, joined));
        }
    }

    rendered_groups.join(", ")
}

fn render_span(m: &GroupedModel) -> String {
    match (m.from_display.is_empty(), m.to_display.is_empty()) {
        (false, false) => format!("{} {}->{}", m.model, m.from_display, m.to_display),
        (false, true) => format!("{} {}->", m.model, m.from_display),
        (true, false) => format!("{} ->{}", m.model, m.to_display),
        (true, true) => m.model.clone(),
    }
}

/// Assemble the result for the state's active mode.
pub fn format_result(state: &EditorState) -> String {
    match state.mode() {
        Mode::Parts => format_parts(state),
        Mode::Oils => format_oils(state),
    }
}

/// Parts mode: name, quoted brand, grouped model/year string.
pub fn format_parts(state: &EditorState) -> String {
    if !state.validate().is_empty() {
        return ERROR_PLACEHOLDER.to_string();
    }

    let mut parts = Vec::new();

    let name = normalize_field(&state.fields().name, CasePolicy::Preserve);
    let brand = normalize_field(&state.fields().brand, CasePolicy::Preserve);
    if !name.is_empty() {
        parts.push(name);
    }
    if !brand.is_empty() {
        parts.push(format!("\"{}\"", brand));
    }

    let grouped = group_entries(state.entries());
    if !grouped.is_empty() {
        parts.push(grouped);
    }

    finish(&parts)
}

/// Oils mode: the fixed leading token plus the non-empty spec fields.
/// The free-text name/brand fields are not part of the oil result.
pub fn format_oils(state: &EditorState) -> String {
    if !state.validate().is_empty() {
        return ERROR_PLACEHOLDER.to_string();
    }

    let oil = state.oil();
    let mut parts = vec![OIL_TOKEN.to_string()];

    let oil_type = normalize_field(&oil.oil_type.to_lowercase(), CasePolicy::Preserve);
    if !oil_type.is_empty() {
        parts.push(oil_type);
    }
    let brand = normalize_field(&oil.brand, CasePolicy::Preserve);
    if !brand.is_empty() {
        parts.push(format!("\"{}\"", brand));
    }
    for value in [&oil.viscosity, &oil.specification, &oil.volume] {
        let normalized = normalize_field(value, CasePolicy::Preserve);
        if !normalized.is_empty() {
            parts.push(normalized);
        }
    }

    finish(&parts)
}

/// Join and apply the final residual-double-space collapse.
fn finish(parts: &[String]) -> String {
    collapse_spaces(&parts.join(" ")).trim().to_string()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
