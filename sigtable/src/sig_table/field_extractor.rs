// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pull the return type, method signature, and description out of one line.
//!
//! The expected shape is:
//!
//! ```text
//! `AacFlTransition AnyTransitionsTo(AacFlState destination)` /// Create a transition from Any to the `destination` state.
//!  ^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^      ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//!  return type     method signature                              description
//! ```
//!
//! Each field comes from the first match of its own regex, independently of the other
//! two. That is why odd lines still produce (odd) fields instead of an error, eg: the
//! description rule doesn't care whether the `///` sits inside or outside the backticks.

use std::sync::LazyLock;

use regex::Regex;

use super::{ExtractedFields, MissingField, SigTableError};

/// Group 1: the shortest run of non-backtick text after a backtick that is followed by
/// whitespace. The whitespace itself is left out.
static RETURN_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+?)\s").expect("Invalid return type regex"));

/// Group 1: starts with a letter right after whitespace, ends with the last `)` on the
/// line that is directly followed by a backtick and a space. `.+` is greedy.
static METHOD_SIGNATURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s([A-Za-z].+\))` ").expect("Invalid method signature regex")
});

/// Group 1: everything after the first `///` and exactly one more character.
static DESCRIPTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"///.(.*)").expect("Invalid description regex"));

/// Extract all three fields from `line`.
///
/// `line_number` (1-based) only shows up in the error.
///
/// # Errors
///
/// Returns [`SigTableError::MalformedLine`] naming the first pattern (in the order
/// return type, method signature, description) that has no match in `line`.
pub fn extract_fields(line: &str, line_number: usize) -> Result<ExtractedFields, SigTableError> {
    let missing = |field| SigTableError::malformed_line(line_number, line, field);

    let return_type = first_group(&RETURN_TYPE_REGEX, line)
        .ok_or_else(|| missing(MissingField::ReturnType))?;
    let method_signature = first_group(&METHOD_SIGNATURE_REGEX, line)
        .ok_or_else(|| missing(MissingField::MethodSignature))?;
    let description = first_group(&DESCRIPTION_REGEX, line)
        .ok_or_else(|| missing(MissingField::Description))?;

    Ok(ExtractedFields {
        return_type: return_type.to_string(),
        method_signature: method_signature.to_string(),
        description: description.to_string(),
    })
}

fn first_group<'a>(regex: &Regex, haystack: &'a str) -> Option<&'a str> {
    regex
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
