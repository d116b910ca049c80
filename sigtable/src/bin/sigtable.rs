// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process;

use clap::Parser;
use r3bl_sigtable::{ISSUES_URL, SystemClipboard,
                    setup_default_miette_global_report_handler,
                    sig_table::{CLIArg, CLICommand, CLIPBOARD_UNTOUCHED, STRIP_DONE,
                                format_skipped, format_summary, run_reformat,
                                run_strip},
                    try_initialize_logging_global};

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let mut clipboard = SystemClipboard;

    match cli_arg.get_command() {
        CLICommand::Reformat => {
            let report = run_reformat(
                &mut clipboard,
                cli_arg.to_reformat_options(),
                &mut std::io::stderr(),
            )?;

            for error in &report.malformed_lines {
                eprintln!("{}", format_skipped(&error.to_string()));
            }

            if report.row_count == 0 && report.has_malformed_lines() {
                eprintln!("{CLIPBOARD_UNTOUCHED}");
            } else {
                println!(
                    "{}",
                    format_summary(report.row_count, report.malformed_lines.len())
                );
            }

            if report.has_malformed_lines() {
                process::exit(1);
            }
        }
        CLICommand::Strip => {
            run_strip(&mut clipboard)?;
            println!("{STRIP_DONE}");
        }
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}
