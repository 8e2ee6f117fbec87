// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pl_core::HistoryItem;

/// Maximum visible length of the result column in history listings.
const RESULT_PREVIEW_CHARS: usize = 80;

/// Format one history item for the text listing.
///
/// Layout: `{id}  {local time}  [{mode}]  {result preview}`.
pub fn format_item(item: &HistoryItem) -> String {
    format!(
        "{}  {}  [{}]  {}",
        item.id,
        item.created_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M"),
        item.mode,
        preview(&item.result)
    )
}

/// Truncate long results at a character boundary with an ellipsis.
fn preview(result: &str) -> String {
    if result.chars().count() <= RESULT_PREVIEW_CHARS {
        return result.to_string();
    }
    let truncated: String = result.chars().take(RESULT_PREVIEW_CHARS).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
