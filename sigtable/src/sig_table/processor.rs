// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Orchestrate a reformat (or strip) run.

use std::io::Write;

use super::{MalformedLinePolicy, ReformatOptions, ReformatReport, SigTableError,
            extract_fields, format_row, remove_group_matches, split_lines};
use crate::{ClipboardService, DEBUG_SIGTABLE_PROCESS_LINE};

/// Turns a block of signature lines into table rows.
#[derive(Debug, Default)]
pub struct LineProcessor {
    options: ReformatOptions,
}

impl LineProcessor {
    #[must_use]
    pub fn new(options: ReformatOptions) -> Self { Self { options } }

    /// Reformat every line of `text`, in order.
    ///
    /// When [`ReformatOptions::echo_lines`] is set, each line is written to `echo`
    /// before it is processed, so the last echoed line is the one that failed.
    ///
    /// # Errors
    ///
    /// Under [`MalformedLinePolicy::Abort`], returns the first
    /// [`SigTableError::MalformedLine`]. Under [`MalformedLinePolicy::Skip`] this never
    /// fails, the malformed lines end up in [`ReformatReport::malformed_lines`].
    pub fn process_text(
        &self,
        text: &str,
        echo: &mut impl Write,
    ) -> Result<ReformatReport, SigTableError> {
        let mut report = ReformatReport::default();

        for (index, line) in split_lines(text).into_iter().enumerate() {
            let line_number = index + 1;

            if self.options.echo_lines {
                // The echo is best effort, a closed stderr shouldn't stop the run.
                writeln!(echo, "{line}").ok();
            }

            match extract_fields(line, line_number) {
                Ok(fields) => {
                    let row = format_row(&fields);
                    DEBUG_SIGTABLE_PROCESS_LINE.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "Line turned into table row",
                            line_number = line_number,
                            row = %row.trim_end(),
                        );
                    });
                    report.push_row(&row);
                }
                Err(error) => match self.options.on_malformed {
                    MalformedLinePolicy::Abort => {
                        tracing::error!(
                            message = "Malformed line, aborting",
                            line_number = line_number,
                            line = %line,
                        );
                        return Err(error);
                    }
                    MalformedLinePolicy::Skip => {
                        tracing::warn!(
                            message = "Malformed line, skipping",
                            line_number = line_number,
                            line = %line,
                        );
                        report.add_malformed(error);
                    }
                },
            }
        }

        Ok(report)
    }
}

/// Read the clipboard, reformat it, and write the rows back.
///
/// The clipboard is only written when the run produced something worth keeping: an
/// abort leaves it untouched, and so does a skip run where every line was malformed.
/// Empty input is written back as empty output.
///
/// # Errors
///
/// Returns an error if the clipboard can't be read or written, or (under
/// [`MalformedLinePolicy::Abort`]) on the first malformed line.
pub fn run_reformat(
    clipboard: &mut impl ClipboardService,
    options: ReformatOptions,
    echo: &mut impl Write,
) -> Result<ReformatReport, SigTableError> {
    let text = clipboard
        .try_to_get_content_from_clipboard()
        .map_err(|source| SigTableError::ReadClipboard { source })?;

    let report = LineProcessor::new(options).process_text(&text, echo)?;

    if report.row_count == 0 && report.has_malformed_lines() {
        tracing::warn!(message = "No rows produced, clipboard left untouched");
        return Ok(report);
    }

    clipboard
        .try_to_put_content_into_clipboard(report.output.clone())
        .map_err(|source| SigTableError::WriteClipboard { source })?;

    tracing::debug!(
        message = "Clipboard now holds table rows",
        row_count = report.row_count,
        skipped = report.malformed_lines.len(),
    );

    Ok(report)
}

/// Read the clipboard, apply [`remove_group_matches`], and write the result back.
/// Returns the new clipboard text.
///
/// # Errors
///
/// Returns an error if the clipboard can't be read or written.
pub fn run_strip(clipboard: &mut impl ClipboardService) -> Result<String, SigTableError> {
    let text = clipboard
        .try_to_get_content_from_clipboard()
        .map_err(|source| SigTableError::ReadClipboard { source })?;

    let stripped = remove_group_matches(&text);

    clipboard
        .try_to_put_content_into_clipboard(stripped.clone())
        .map_err(|source| SigTableError::WriteClipboard { source })?;

    tracing::debug!(message = "Clipboard cells stripped", changed = (stripped != text));

    Ok(stripped)
}
