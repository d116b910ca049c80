// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reformat method signature doc lines into markdown table rows.
//!
//! The pipeline for one run is: clipboard text → [`split_lines`] → [`extract_fields`]
//! per line → [`format_row`] → concatenated rows → clipboard. [`LineProcessor`] runs
//! the pure part, [`run_reformat`] and [`run_strip`] bind it to a
//! [`crate::ClipboardService`].

pub mod cli_arg;
pub mod error;
pub mod field_extractor;
pub mod group_match_stripper;
pub mod line_splitter;
pub mod processor;
pub mod row_formatter;
pub mod types;
pub mod ui_str;

// Re-export public API for flat module interface.
pub use cli_arg::*;
pub use error::*;
pub use field_extractor::*;
pub use group_match_stripper::*;
pub use line_splitter::*;
pub use processor::*;
pub use row_formatter::*;
pub use types::*;
pub use ui_str::*;
