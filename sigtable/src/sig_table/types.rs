// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core types for reformatting signature lines.

use std::fmt;

use clap::ValueEnum;

use super::SigTableError;

/// The three fields pulled out of one signature line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub return_type: String,
    pub method_signature: String,
    pub description: String,
}

/// Which of the three patterns failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    ReturnType,
    MethodSignature,
    Description,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::ReturnType => write!(f, "return type"),
            MissingField::MethodSignature => write!(f, "method signature"),
            MissingField::Description => write!(f, "/// description"),
        }
    }
}

/// What to do when a line doesn't have the expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MalformedLinePolicy {
    /// Stop at the first malformed line and leave the clipboard untouched.
    #[default]
    Abort,
    /// Leave malformed lines out, write the rest, and report what was skipped.
    Skip,
}

/// Options for reformatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReformatOptions {
    pub on_malformed: MalformedLinePolicy,
    /// Echo each line to the diagnostic sink before processing it.
    pub echo_lines: bool,
}

impl Default for ReformatOptions {
    fn default() -> Self {
        Self {
            on_malformed: MalformedLinePolicy::Abort,
            echo_lines: true,
        }
    }
}

impl ReformatOptions {
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.echo_lines = false;
        self
    }

    #[must_use]
    pub fn on_malformed(mut self, policy: MalformedLinePolicy) -> Self {
        self.on_malformed = policy;
        self
    }
}

/// Result of reformatting a block of text.
#[derive(Debug, Default)]
pub struct ReformatReport {
    /// Concatenated table rows, each ending in `\n`.
    pub output: String,
    pub row_count: usize,
    /// Only ever non-empty under [`MalformedLinePolicy::Skip`].
    pub malformed_lines: Vec<SigTableError>,
}

impl ReformatReport {
    pub fn push_row(&mut self, row: &str) {
        self.output.push_str(row);
        self.row_count += 1;
    }

    pub fn add_malformed(&mut self, error: SigTableError) { self.malformed_lines.push(error); }

    #[must_use]
    pub fn has_malformed_lines(&self) -> bool { !self.malformed_lines.is_empty() }
}
