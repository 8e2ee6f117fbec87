// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    full = { "VW:passat B5:1974:1997", "VW", "passat B5", "1974", "1997", false },
    no_years = { "VW:Golf", "VW", "Golf", "", "", false },
    brand_only = { "VW", "VW", "", "", "", false },
    model_only = { ":Golf", "", "Golf", "", "", false },
    open_to = { "BMW:X5:2005:", "BMW", "X5", "2005", "", false },
    open_from = { "BMW:X5::2010", "BMW", "X5", "", "2010", false },
    keep_flag = { "VW:eGOLF:::keep", "VW", "eGOLF", "", "", true },
    keep_with_years = { "VW:eGOLF:14:20:keep", "VW", "eGOLF", "14", "20", true },
)]
fn parse_entry_cases(
    spec: &str,
    car_brand: &str,
    model: &str,
    year_from: &str,
    year_to: &str,
    keep: bool,
) {
    let parsed = parse_entry(spec).unwrap();
    assert_eq!(parsed.car_brand, car_brand);
    assert_eq!(parsed.model, model);
    assert_eq!(parsed.year_from, year_from);
    assert_eq!(parsed.year_to, year_to);
    assert_eq!(parsed.keep, keep);
}

#[parameterized(
    bad_flag = { "VW:Golf:74:97:shout" },
    too_many = { "VW:Golf:74:97:keep:extra" },
)]
fn parse_entry_rejects(spec: &str) {
    assert!(matches!(
        parse_entry(spec),
        Err(Error::InvalidEntrySpec { .. })
    ));
}

#[test]
fn build_state_normalizes_fields_and_entries() {
    let state = build_state(
        Some("подшипник ступицы ЗАДНЕЙ"),
        Some("M-TEX"),
        &["VW:passat B5:1974:1997".to_string()],
    )
    .unwrap();

    assert_eq!(state.fields().name, "Подшипник ступицы ЗАДНЕЙ");
    assert_eq!(
        format_result(&state),
        "Подшипник ступицы ЗАДНЕЙ \"M-TEX\" VW Passat B5 74->97"
    );
}

#[test]
fn build_state_keep_flag_preserves_casing() {
    let state = build_state(None, None, &["VW:eGOLF:::keep".to_string()]).unwrap();
    assert_eq!(format_result(&state), "VW eGOLF");
}

#[test]
fn build_state_without_entries_renders_fields_only() {
    let state = build_state(Some("фильтр"), None, &[]).unwrap();
    assert_eq!(format_result(&state), "Фильтр");
}
