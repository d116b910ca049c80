// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # R3BL sigtable
//!
//! Turn scripting reference lines that describe method signatures into markdown table
//! rows, straight from the clipboard.
//!
//! ## What it does
//!
//! Copy a block of lines like this one:
//!
//! ```text
//! `AacFlTransition AnyTransitionsTo(AacFlState destination)` /// Create a transition from Any to the `destination` state.
//! ```
//!
//! Run `sigtable`, and the clipboard now holds:
//!
//! ```text
//! | `AnyTransitionsTo(AacFlState destination)` | `AacFlTransition` | Create a transition from Any to the `destination` state. |
//! ```
//!
//! Each line yields three fields (see [`sig_table::extract_fields`]):
//!
//! | Field            | Where it comes from                                         |
//! | ---------------- | ----------------------------------------------------------- |
//! | return type      | first whitespace terminated token after the first backtick  |
//! | method signature | letter-led run ending in `)` right before the closing tick  |
//! | description      | everything after `///` and one more character               |
//!
//! ## Usage
//!
//! **Reformat the clipboard** (default, aborts on the first malformed line):
//! ```bash
//! sigtable
//! ```
//!
//! **Keep going past malformed lines**, reporting them at the end:
//! ```bash
//! sigtable --on-malformed skip
//! ```
//!
//! **Strip the leading type token from existing table cells**:
//! ```bash
//! sigtable strip
//! ```
//!
//! **Log to `log.txt`** for debugging:
//! ```bash
//! sigtable --enable-logging
//! ```
//!
//! ## Library use
//!
//! Everything the binary does is available as functions. The clipboard sits behind the
//! [`clipboard::ClipboardService`] trait, so tests (and other front ends) can swap in
//! [`clipboard::clipboard_test_fixtures::TestClipboard`].
//!
//! ```
//! use r3bl_sigtable::sig_table::{LineProcessor, ReformatOptions};
//!
//! let processor = LineProcessor::new(ReformatOptions::default().quiet());
//! let report = processor
//!     .process_text("`int Count()` /// Number of items.", &mut std::io::sink())
//!     .unwrap();
//! assert_eq!(report.output, "| `Count()` | `int` | Number of items. |\n");
//! ```

// Attach sources.
pub mod clipboard;
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod sig_table;

// Re-export.
pub use clipboard::*;
pub use common::*;
pub use log::*;

/// Log the full text read from and written to the clipboard (only visible when logging
/// is enabled).
pub const DEBUG_SIGTABLE_CLIPBOARD: bool = true;

/// Log each line as it is turned into a table row (only visible when logging is
/// enabled).
pub const DEBUG_SIGTABLE_PROCESS_LINE: bool = true;

/// Shown at the bottom of error reports.
pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";
