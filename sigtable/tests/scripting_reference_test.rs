// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run a whole scripting reference section through the clipboard pipeline.

use pretty_assertions::assert_eq;
use r3bl_sigtable::{clipboard_test_fixtures::TestClipboard,
                    sig_table::{LineProcessor, MalformedLinePolicy, ReformatOptions,
                                SigTableError, extract_fields, format_row,
                                remove_group_matches, run_reformat, split_lines}};

const SECTION: &str = "\
`AacFlTransition AnyTransitionsTo(AacFlState destination)` /// Create a transition from Any to the `destination` state.
`AacFlEntryTransition EntryTransitionsTo(AacFlState destination)` /// Create a transition from the Entry to the `destination` state.
`AacFlState NewState(string name)` /// Create a new state, initially positioned below the last generated state of this layer.
`AacFlStateMachine NewSubStateMachine(string name)` /// Create a new state machine, initially positioned below the last generated state of this layer.
`AacFlLayer WithDefaultState(AacFlState newDefaultState)` /// Set the default state of the layer.
";

const TABLE: &str = "\
| `AnyTransitionsTo(AacFlState destination)` | `AacFlTransition` | Create a transition from Any to the `destination` state. |
| `EntryTransitionsTo(AacFlState destination)` | `AacFlEntryTransition` | Create a transition from the Entry to the `destination` state. |
| `NewState(string name)` | `AacFlState` | Create a new state, initially positioned below the last generated state of this layer. |
| `NewSubStateMachine(string name)` | `AacFlStateMachine` | Create a new state machine, initially positioned below the last generated state of this layer. |
| `WithDefaultState(AacFlState newDefaultState)` | `AacFlLayer` | Set the default state of the layer. |
";

#[test]
fn test_section_reformats_in_order() {
    let mut clipboard = TestClipboard::new(SECTION);
    let report = run_reformat(
        &mut clipboard,
        ReformatOptions::default().quiet(),
        &mut std::io::sink(),
    )
    .unwrap();

    assert_eq!(report.row_count, 5);
    assert_eq!(clipboard.content, TABLE);
}

#[test]
fn test_row_count_matches_well_formed_line_count() {
    let with_noise = format!("## Layer\n{SECTION}Some trailing prose.\n");
    let report = LineProcessor::new(
        ReformatOptions::default()
            .quiet()
            .on_malformed(MalformedLinePolicy::Skip),
    )
    .process_text(&with_noise, &mut std::io::sink())
    .unwrap();

    assert_eq!(report.row_count, 5);
    assert_eq!(report.malformed_lines.len(), 2);
    assert_eq!(report.output, TABLE);
}

#[test]
fn test_every_row_has_the_table_shape() {
    for (index, line) in split_lines(SECTION).into_iter().enumerate() {
        let fields = extract_fields(line, index + 1).unwrap();
        let row = format_row(&fields);
        let expected = format!(
            "| `{}` | `{}` | {} |\n",
            fields.method_signature, fields.return_type, fields.description
        );
        assert_eq!(row, expected);
    }
}

#[test]
fn test_line_without_marker_aborts_whole_run() {
    let input = SECTION.replace("/// Set the default", "Set the default");
    let mut clipboard = TestClipboard::new(input.clone());
    let result = run_reformat(
        &mut clipboard,
        ReformatOptions::default().quiet(),
        &mut std::io::sink(),
    );

    assert!(matches!(
        result,
        Err(SigTableError::MalformedLine { line_number: 5, .. })
    ));
    assert_eq!(clipboard.content, input);
}

#[test]
fn test_strip_legacy_declaration_table() {
    let legacy = "\
| `AacFlState NewState(string name)` | Create a new state. |
| `AacFlLayer WithDefaultState(AacFlState newDefaultState)` | Set the default state. |
";
    assert_eq!(
        remove_group_matches(legacy),
        "\
| `NewState(string name)` | Create a new state. |
| `WithDefaultState(AacFlState newDefaultState)` | Set the default state. |
"
    );
}
