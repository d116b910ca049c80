// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Format one markdown table row from extracted fields.

use super::ExtractedFields;

/// Produce `` | `<method>` | `<return type>` | <description> |`` plus a trailing `\n`.
///
/// The method signature comes first, the return type second. The description is
/// copied verbatim, backticks and all.
#[must_use]
pub fn format_row(fields: &ExtractedFields) -> String {
    let ExtractedFields {
        return_type,
        method_signature,
        description,
    } = fields;
    format!("| `{method_signature}` | `{return_type}` | {description} |\n")
}
