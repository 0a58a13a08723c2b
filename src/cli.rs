//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `mintid`.
#[derive(Debug, Parser)]
#[command(name = "mintid", version, about = "Mint random and time-ordered identifiers")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mint 24-char hex tokens, optionally prefixed.
    Token {
        /// Prefix joined to the token with an underscore.
        #[arg(long)]
        prefix: Option<String>,
        /// How many identifiers to mint.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
    /// Mint 12-char hex short codes.
    Short {
        /// How many identifiers to mint.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
    /// Mint version-4 UUIDs.
    Uuid {
        /// How many identifiers to mint.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
    /// Mint millisecond-sortable timestamp identifiers.
    Stamp {
        /// How many identifiers to mint.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
}
