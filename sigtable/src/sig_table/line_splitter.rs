// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Split clipboard text into lines on every universal line boundary.
//!
//! [`str::lines`] only knows `\n` and `\r\n`. Text copied out of editors and web pages
//! on other platforms can also carry a bare `\r`, form feeds, or the unicode line and
//! paragraph separators, so those count as boundaries too.

/// `\r` is handled separately, since `\r\n` is one boundary and not two.
const LINE_BOUNDARIES: [char; 9] = [
    '\n', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

const CARRIAGE_RETURN: char = '\r';

/// Split `text` into lines, without their terminators.
///
/// - A trailing boundary does not produce an empty last line.
/// - Empty lines in the middle are kept.
/// - Empty input produces no lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        let terminator_len = if ch == CARRIAGE_RETURN {
            match chars.peek() {
                Some((_, '\n')) => {
                    chars.next();
                    2
                }
                _ => 1,
            }
        } else if LINE_BOUNDARIES.contains(&ch) {
            ch.len_utf8()
        } else {
            continue;
        };

        lines.push(&text[line_start..index]);
        line_start = index + terminator_len;
    }

    if line_start < text.len() {
        lines.push(&text[line_start..]);
    }

    lines
}
