// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! System clipboard access for copying assembled results.

use arboard::Clipboard;

use crate::error::{Error, Result};

/// Copy text to the system clipboard.
///
/// One write, no read. Failures (headless session, missing display server)
/// surface as [`Error::Clipboard`]; callers treat them as non-fatal.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| Error::Clipboard(format!("failed to access clipboard: {e}")))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Clipboard(format!("failed to copy to clipboard: {e}")))
}
