// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Strip the leading token from backtick cells of an existing markdown table.
//!
//! Tables written by hand often put the whole declaration in one cell:
//!
//! ```text
//! | `AacFlTransition AnyTransitionsTo(AacFlState destination)` | Create a transition. |
//! ```
//!
//! Running [`remove_group_matches`] over it drops the return type:
//!
//! ```text
//! | `AnyTransitionsTo(AacFlState destination)` | Create a transition. |
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// `| ` + backtick, then the shortest non-backtick run that ends in whitespace.
static CELL_HEAD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\| `([^`]+?)\s").expect("Invalid cell head regex"));

const CELL_OPENER: &str = "| `";

/// Replace every non-overlapping `` | `<token><whitespace>`` with `` | ` ``.
///
/// Only the first whitespace-terminated token of each cell goes away, so a cell with
/// several interior spaces needs several passes to be reduced to one token. Once every
/// cell is down to a single token, further passes change nothing.
#[must_use]
pub fn remove_group_matches(input: &str) -> String {
    CELL_HEAD_REGEX.replace_all(input, CELL_OPENER).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_strip_drops_return_type_from_declaration_cell() {
        let input = "| `AacFlTransition AnyTransitionsTo(AacFlState destination)` | Create a transition. |";
        assert_eq!(
            remove_group_matches(input),
            "| `AnyTransitionsTo(AacFlState destination)` | Create a transition. |"
        );
    }

    #[test]
    fn test_strip_only_touches_cells_with_interior_whitespace() {
        // The second cell has no whitespace before its closing tick.
        assert_eq!(remove_group_matches("| `Foo bar` | `Baz`"), "| `bar` | `Baz`");
    }

    #[test]
    fn test_strip_every_matching_cell() {
        assert_eq!(
            remove_group_matches("| `int Count()` | `bool IsEmpty()` |"),
            "| `Count()` | `IsEmpty()` |"
        );
    }

    #[test_case("| `bar` | `Baz`" ; "single token cells")]
    #[test_case("no table here" ; "plain text")]
    #[test_case("" ; "empty")]
    #[test_case("|`Foo bar`|" ; "no space after pipe")]
    fn test_strip_is_noop(input: &str) {
        assert_eq!(remove_group_matches(input), input);
    }

    #[test]
    fn test_strip_is_idempotent_once_cells_are_single_tokens() {
        let input = "| `Foo bar` | `Baz`\n| `int Count()` | `void Clear()` |\n";
        let once = remove_group_matches(input);
        let twice = remove_group_matches(&once);
        assert_eq!(once, "| `bar` | `Baz`\n| `Count()` | `Clear()` |\n");
        assert_eq!(twice, once);
    }
}
