//! Command dispatch and handler modules.

mod list;
mod plan;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Plan {
            packages,
            tree,
            depth,
            why,
            format,
            output,
        } => plan::exec(
            packages,
            cli.universe,
            tree,
            depth,
            why,
            format,
            output,
        ),
        Command::List { updates } => list::exec(cli.universe, updates),
    }
}
