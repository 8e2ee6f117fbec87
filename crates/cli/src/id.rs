// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Generate a history item ID from the result string and timestamp.
/// Format: h-{hash} where hash is first 8 hex chars of SHA256(result + timestamp)
pub fn history_id(result: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", result, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]); // First 8 hex chars (4 bytes)
    format!("h-{}", short_hash)
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
