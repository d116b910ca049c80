// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User-facing strings and messages.

pub const ROWS_COPIED: &str = "table rows copied to the clipboard";
pub const CLIPBOARD_UNTOUCHED: &str = "No rows produced, the clipboard was left untouched.";
pub const STRIP_DONE: &str = "Stripped table cells copied to the clipboard.";
pub const SKIPPED_PREFIX: &str = "Skipped";

/// Format the summary printed after a reformat run.
#[must_use]
pub fn format_summary(row_count: usize, skipped: usize) -> String {
    if skipped == 0 {
        format!("{row_count} {ROWS_COPIED}.")
    } else {
        format!("{row_count} {ROWS_COPIED}, {skipped} malformed lines skipped.")
    }
}

/// Format one skipped line message.
#[must_use]
pub fn format_skipped(error: &str) -> String { format!("  - {SKIPPED_PREFIX}: {error}") }
