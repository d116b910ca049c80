// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for sigtable.

use clap::{Args, Parser, Subcommand};

use super::{MalformedLinePolicy, ReformatOptions};

/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
#[derive(Debug, Parser)]
#[command(bin_name = "sigtable")]
#[command(
    about = "📋 Turn method signature doc lines on the clipboard into markdown table rows",
    long_about = "Reads the clipboard, and turns each line shaped like\n  \
                  `ReturnType Method(args)` /// Description\n\
                  into a markdown table row\n  \
                  | `Method(args)` | `ReturnType` | Description |\n\
                  then writes the rows back to the clipboard.\n\n\
                  With no command, `reformat` runs."
)]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: Option<CLICommand>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'q',
        help = "Don't echo each clipboard line to stderr while processing"
    )]
    pub quiet: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = MalformedLinePolicy::Abort,
        help = "What to do with a line that isn't shaped like a signature"
    )]
    pub on_malformed: MalformedLinePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum CLICommand {
    /// Reformat signature lines into table rows (the default)
    #[default]
    Reformat,
    /// Drop the leading type token from each `| `...` table cell
    Strip,
}

impl CLIArg {
    #[must_use]
    pub fn get_command(&self) -> CLICommand { self.command.unwrap_or_default() }

    /// Convert CLI arguments to [`ReformatOptions`].
    #[must_use]
    pub fn to_reformat_options(&self) -> ReformatOptions {
        ReformatOptions {
            on_malformed: self.global_options.on_malformed,
            echo_lines: !self.global_options.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = CLIArg::try_parse_from(["sigtable"]).unwrap();

        assert_eq!(cli.get_command(), CLICommand::Reformat);
        assert!(!cli.global_options.enable_logging);
        assert_eq!(cli.to_reformat_options(), ReformatOptions::default());
    }

    #[test]
    fn test_cli_skip_and_quiet() {
        let cli =
            CLIArg::try_parse_from(["sigtable", "--on-malformed", "skip", "-q"]).unwrap();

        let opts = cli.to_reformat_options();
        assert_eq!(opts.on_malformed, MalformedLinePolicy::Skip);
        assert!(!opts.echo_lines);
    }

    #[test]
    fn test_cli_strip_with_global_flag_after_subcommand() {
        let cli = CLIArg::try_parse_from(["sigtable", "strip", "-l"]).unwrap();

        assert_eq!(cli.get_command(), CLICommand::Strip);
        assert!(cli.global_options.enable_logging);
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        assert!(CLIArg::try_parse_from(["sigtable", "--on-malformed", "ignore"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        CLIArg::command().debug_assert();
    }
}
