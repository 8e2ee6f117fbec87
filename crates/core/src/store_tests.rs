// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::state::EditorState;
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

fn item_at(id: &str, millis: i64, result: &str) -> HistoryItem {
    HistoryItem::new(
        id.to_string(),
        Utc.timestamp_millis_opt(millis).single().unwrap(),
        result.to_string(),
        &EditorState::new(),
    )
}

#[test]
fn missing_file_loads_empty() {
    let temp = TempDir::new().unwrap();
    let loaded = read_history(&temp.path().join("history.jsonl")).unwrap();
    assert!(loaded.log.is_empty());
    assert_eq!(loaded.skipped, 0);
}

#[test]
fn write_then_read_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("history.jsonl");

    let mut log = HistoryLog::new();
    log.record(item_at("h-1", 1_000, "Подшипник VW Golf"));
    log.record(item_at("h-2", 2_000, "Масло 15w40"));
    write_history(&path, &log).unwrap();

    let loaded = read_history(&path).unwrap();
    assert_eq!(loaded.skipped, 0);
    assert_eq!(loaded.log.len(), 2);
    assert_eq!(loaded.log.items()[0].id, "h-2");
    assert_eq!(loaded.log.items()[1].result, "Подшипник VW Golf");
}

#[test]
fn write_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("history.jsonl");

    let mut log = HistoryLog::new();
    log.record(item_at("h-1", 1_000, "result"));
    write_history(&path, &log).unwrap();
    assert!(path.exists());
}

#[test]
fn malformed_lines_are_skipped_and_counted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("history.jsonl");

    let good = serde_json::to_string(&item_at("h-1", 1_000, "good")).unwrap();
    let content = format!("{good}\nnot json at all\n{{\"id\":\"h-2\"}}\n\n");
    std::fs::write(&path, content).unwrap();

    let loaded = read_history(&path).unwrap();
    assert_eq!(loaded.log.len(), 1);
    assert_eq!(loaded.log.items()[0].id, "h-1");
    assert_eq!(loaded.skipped, 2);
}

#[test]
fn load_sorts_descending_regardless_of_file_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("history.jsonl");

    let lines: Vec<String> = [1_000, 3_000, 2_000]
        .iter()
        .enumerate()
        .map(|(i, millis)| {
            serde_json::to_string(&item_at(&format!("h-{i}"), *millis, "r")).unwrap()
        })
        .collect();
    std::fs::write(&path, lines.join("\n")).unwrap();

    let loaded = read_history(&path).unwrap();
    let ids: Vec<&str> = loaded.log.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["h-1", "h-2", "h-0"]);
}

#[test]
fn rewrite_replaces_previous_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("history.jsonl");

    let mut log = HistoryLog::new();
    log.record(item_at("h-1", 1_000, "first"));
    write_history(&path, &log).unwrap();

    log.clear();
    log.record(item_at("h-2", 2_000, "second"));
    write_history(&path, &log).unwrap();

    let loaded = read_history(&path).unwrap();
    assert_eq!(loaded.log.len(), 1);
    assert_eq!(loaded.log.items()[0].id, "h-2");
}

#[test]
fn remove_history_deletes_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("history.jsonl");

    let mut log = HistoryLog::new();
    log.record(item_at("h-1", 1_000, "first"));
    write_history(&path, &log).unwrap();

    remove_history(&path).unwrap();
    assert!(!path.exists());

    // Removing an absent file is not an error.
    remove_history(&path).unwrap();
}
