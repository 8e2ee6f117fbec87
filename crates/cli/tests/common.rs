// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Command wired to an isolated data dir with the system clipboard disabled.
pub fn pl(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("partline").unwrap();
    cmd.env("PARTLINE_DATA_DIR", temp.path())
        .env("PARTLINE_NO_CLIPBOARD", "1")
        .env("XDG_CONFIG_HOME", temp.path())
        .env("NO_COLOR", "1");
    cmd
}

/// Copy one parts result into history and return the temp dir.
pub fn temp_with_copied(name: &str, entry: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    pl(&temp)
        .arg("parts")
        .arg("--name")
        .arg(name)
        .arg("--entry")
        .arg(entry)
        .arg("--copy")
        .assert()
        .success();
    temp
}

/// Extract the first history item id from `partline history` output.
pub fn first_history_id(temp: &TempDir) -> String {
    let output = pl(temp).arg("history").output().unwrap();
    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .find(|s| s.starts_with("h-"))
        .unwrap()
        .to_string()
}
