// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configure how [miette](https://docs.rs/miette/latest/miette/index.html) renders the
//! error report when `main() -> miette::Result<_>` errors out.
//!
//! - The hook is lazy. It only runs when a report is about to be displayed, so the
//!   terminal width is measured just before output, and never if nothing fails.
//! - [`MietteHandlerOpts`] configures the default `MietteHandler`. Under the hood,
//!   `build()` produces a [`miette::GraphicalReportHandler`] when the output supports
//!   it.

use miette::MietteHandlerOpts;
use tracing::debug;

const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Install the global report handler. Calling this more than once is harmless, only
/// the first hook sticks.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| columns);
            debug!("miette::set_hook -> terminal_width: {}", it);
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .terminal_links(true)
                .unicode(true)
                .context_lines(1)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
