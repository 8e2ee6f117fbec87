// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn build_state_fills_only_given_fields() {
    let state = build_state(
        Some("Моторное".to_string()),
        None,
        Some("15w40".to_string()),
        None,
        Some("1л".to_string()),
    );
    assert_eq!(state.mode(), Mode::Oils);
    assert_eq!(state.oil().oil_type, "Моторное");
    assert!(state.oil().brand.is_empty());
    assert_eq!(format_result(&state), "Масло моторное 15w40 1л");
}

#[test]
fn full_oil_listing_matches_expected_form() {
    let state = build_state(
        Some("Моторное".to_string()),
        Some("HYUNDAI/XTeer".to_string()),
        Some("15w40".to_string()),
        Some("HD 7000 CI-4".to_string()),
        Some("1л".to_string()),
    );
    assert_eq!(
        format_result(&state),
        "Масло моторное \"HYUNDAI/XTeer\" 15w40 HD 7000 CI-4 1л"
    );
}

#[test]
fn oil_fields_collapse_space_runs() {
    let state = build_state(None, None, None, Some("HD  7000   CI-4".to_string()), None);
    assert_eq!(state.oil().specification, "HD 7000 CI-4");
}
