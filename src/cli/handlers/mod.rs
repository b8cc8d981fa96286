//! Command handlers for the CLI.

mod records;
mod slug;

use anyhow::Result;
use clap::CommandFactory;

use super::{Cli, CompletionsArgs};

// Re-export public items
pub use records::handle_records;
pub use slug::{handle_base, handle_build, handle_extract};

/// Writes shell completions for the `recslug` binary to stdout.
pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "recslug", &mut std::io::stdout());
    Ok(())
}
