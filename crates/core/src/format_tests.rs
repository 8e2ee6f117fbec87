// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::entry::OilField;

fn entry(id: &str, brand: &str, model: &str, from: &str, to: &str) -> PartEntry {
    PartEntry {
        id: id.to_string(),
        car_brand: brand.to_string(),
        model: model.to_string(),
        year_from: from.to_string(),
        year_to: to.to_string(),
        keep_uppercase: false,
    }
}

fn parts_state(name: &str, brand: &str, specs: &[(&str, &str, &str, &str)]) -> EditorState {
    let mut state = EditorState::new();
    state.set_name(name);
    state.set_brand(brand);
    for (car_brand, model, from, to) in specs {
        let id = state.add_entry();
        state.set_car_brand(&id, car_brand).unwrap();
        state.set_model(&id, model).unwrap();
        state.set_year_from(&id, from).unwrap();
        state.set_year_to(&id, to).unwrap();
    }
    state
}

#[test]
fn full_parts_listing() {
    let state = parts_state(
        "подшипник ступицы ЗАДНЕЙ",
        "M-TEX",
        &[("VW", "passat B5", "1974", "1997")],
    );
    assert_eq!(
        format_result(&state),
        "Подшипник ступицы ЗАДНЕЙ \"M-TEX\" VW Passat B5 74->97"
    );
}

#[test]
fn models_share_one_brand_group() {
    let state = parts_state("", "", &[("VW", "Golf", "", ""), ("VW", "Passat", "", "")]);
    assert_eq!(format_result(&state), "VW Golf, Passat");
}

#[test]
fn groups_join_in_first_seen_order() {
    let state = parts_state(
        "",
        "",
        &[
            ("VW", "Golf", "", ""),
            ("BMW", "X5", "", ""),
            ("VW", "Passat", "", ""),
        ],
    );
    assert_eq!(format_result(&state), "VW Golf, Passat, BMW X5");
}

#[test]
fn year_bounds_render_directionally() {
    let entries = [
        entry("e1", "VW", "Golf", "1974", ""),
        entry("e2", "VW", "Passat", "", "97"),
        entry("e3", "VW", "Polo", "", ""),
    ];
    assert_eq!(group_entries(&entries), "VW Golf 74->, Passat ->97, Polo");
}

#[test]
fn blank_entries_are_discarded() {
    let entries = [
        entry("e1", "", "", "", ""),
        entry("e2", "  ", "  ", "", ""),
        entry("e3", "VW", "Golf", "", ""),
    ];
    assert_eq!(group_entries(&entries), "VW Golf");
}

#[test]
fn bare_brand_without_models() {
    let entries = [entry("e1", "VW", "", "", "")];
    assert_eq!(group_entries(&entries), "VW");
}

#[test]
fn empty_brand_groups_render_models_alone() {
    let entries = [
        entry("e1", "", "Golf", "", ""),
        entry("e2", "", "Passat", "", ""),
    ];
    assert_eq!(group_entries(&entries), "Golf, Passat");
}

#[test]
fn bad_year_taints_the_whole_brand_group() {
    let entries = [
        entry("e1", "VW", "Golf", "123", ""),
        entry("e2", "VW", "Passat", "1990", "1997"),
        entry("e3", "BMW", "X5", "2000", ""),
    ];
    assert_eq!(
        group_entries(&entries),
        "VW Golf (validation error), Passat (validation error), BMW X5 00->"
    );
}

#[test]
fn keep_uppercase_skips_capitalization() {
    let mut state = EditorState::new();
    let id = state.add_entry();
    state.set_keep_uppercase(&id, true).unwrap();
    state.set_car_brand(&id, "VW").unwrap();
    state.set_model(&id, "eGOLF").unwrap();
    assert_eq!(format_result(&state), "VW eGOLF");
}

#[test]
fn validation_findings_block_the_result() {
    let state = parts_state("подшипник", "", &[("VW", "Golf", "185", "")]);
    assert_eq!(format_result(&state), ERROR_PLACEHOLDER);
}

#[test]
fn stale_year_error_blocks_oils_result_too() {
    let mut state = parts_state("", "", &[("VW", "Golf", "18", "")]);
    let id = state.add_entry();
    state.set_year_from(&id, "bad").unwrap();
    state.set_mode(Mode::Oils);
    state.set_oil(OilField::Type, "Моторное");
    assert_eq!(format_result(&state), ERROR_PLACEHOLDER);
}

#[test]
fn empty_parts_state_renders_empty() {
    let state = EditorState::new();
    assert_eq!(format_result(&state), "");
}

#[test]
fn oils_listing_renders_all_fields() {
    let mut state = EditorState::new();
    state.set_mode(Mode::Oils);
    state.set_oil(OilField::Type, "Моторное");
    state.set_oil(OilField::Brand, "HYUNDAI/XTeer");
    state.set_oil(OilField::Viscosity, "15w40");
    state.set_oil(OilField::Specification, "HD 7000 CI-4");
    state.set_oil(OilField::Volume, "1л");
    assert_eq!(
        format_result(&state),
        "Масло моторное \"HYUNDAI/XTeer\" 15w40 HD 7000 CI-4 1л"
    );
}

#[test]
fn oils_listing_skips_empty_fields() {
    let mut state = EditorState::new();
    state.set_mode(Mode::Oils);
    state.set_oil(OilField::Viscosity, "75w90");
    state.set_oil(OilField::Volume, "4л");
    assert_eq!(format_result(&state), "Масло 75w90 4л");
}

#[test]
fn oils_listing_ignores_shared_name_and_brand() {
    let mut state = EditorState::new();
    state.set_name("Масло трансмиссионное");
    state.set_brand("Castrol");
    state.set_mode(Mode::Oils);
    state.set_oil(OilField::Type, "Трансмиссионное");
    assert_eq!(format_result(&state), "Масло трансмиссионное");
}

#[test]
fn result_collapses_residual_double_spaces() {
    let mut state = EditorState::new();
    state.set_name("подшипник ");
    state.set_brand(" M-TEX");
    let result = format_result(&state);
    assert_eq!(result, "Подшипник \"M-TEX\"");
    assert!(!crate::normalize::has_double_space(&result));
}
