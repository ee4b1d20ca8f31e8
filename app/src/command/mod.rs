//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own zero-sized strategy type with its own input
//! type, dispatched statically from `main`.

use anyhow::Context;
use std::io::{IsTerminal, Read};
use std::path::Path;
use tracing::info;

mod example;
mod explain;
mod info;
mod init;
mod interpret;
mod version;

pub use example::ExampleStrategy;
pub use explain::{ExplainInput, ExplainStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use interpret::{InterpretInput, InterpretStrategy};
pub use version::VersionStrategy;

/// Contract shared by all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// Input this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Resolve the text to analyse: `--text`, then `--file`, then piped stdin.
///
/// An interactive terminal on stdin counts as no input.
fn read_input(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        info!("No --text, --file or piped input given");
        return Ok(String::new());
    }

    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("Failed to read input from stdin")?;
    Ok(buffer)
}
