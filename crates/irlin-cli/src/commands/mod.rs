pub mod check;
pub mod dump;
pub mod input;
pub mod logging;
pub mod opcodes;

#[cfg(test)]
mod opcodes_tests;

use std::io;
use std::path::PathBuf;

use irlin_core::LoadError;

/// Failure of one CLI command. Printed as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{unit}: {source}")]
    Unit {
        unit: String,
        source: irlin_emit::Error,
    },
    #[error(transparent)]
    Serialize(#[from] irlin_emit::Error),
    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Print the error and exit with status 1.
pub fn exit_with(err: CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
