//! Identifier minting helpers: hex tokens, short codes, version-4 UUIDs,
//! and millisecond-sortable timestamp identifiers.
//!
//! The randomness and clock dependencies are port traits ([`ports`]) with
//! swappable adapters ([`adapters`]), so tests can mint deterministically
//! while production draws from the OS RNG and system clock.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod mint;
pub mod ports;

pub use mint::{generate, short, timestamp, uuid, Minter};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_uuid() {
        let result = run(["mintid", "uuid"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["mintid", "unknown"]);
        assert!(result.is_err());
    }
}
