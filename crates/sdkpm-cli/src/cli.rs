//! CLI argument definitions for sdkpm.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use sdkpm_core::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "sdkpm",
    version,
    about = "Plan SDK package installs",
    long_about = "sdkpm works out everything a set of SDK packages needs, skips what is \
                  already installed, and prints the order to install the rest in."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Universe descriptor (TOML) listing installed and available packages
    #[arg(short, long, global = true)]
    pub universe: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the install order for one or more packages
    Plan {
        /// Package ids to install
        #[arg(required = true)]
        packages: Vec<String>,
        /// Show the dependency tree instead of the install order
        #[arg(long)]
        tree: bool,
        /// Maximum tree depth
        #[arg(long)]
        depth: Option<u32>,
        /// Explain why a package is part of the plan
        #[arg(long)]
        why: Option<String>,
        /// Output format (defaults to `[output] format` from config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Also write the plan to a file (.json for JSON, TOML otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List installed and available packages
    List {
        /// Only show packages with an update available
        #[arg(long)]
        updates: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_format(args: &[&str]) -> Option<FormatArg> {
        match Cli::try_parse_from(args).unwrap().command {
            Command::Plan { format, .. } => format,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn format_values_map_to_output_format() {
        let json = plan_format(&["sdkpm", "plan", "tools", "--format", "json"]);
        assert_eq!(json, Some(FormatArg::Json));
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);

        let text = plan_format(&["sdkpm", "plan", "tools", "--format", "text"]);
        assert_eq!(OutputFormat::from(text.unwrap()), OutputFormat::Text);

        assert_eq!(plan_format(&["sdkpm", "plan", "tools"]), None);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Cli::try_parse_from(["sdkpm", "plan", "tools", "--format", "yaml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
