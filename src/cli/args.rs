//! @dose
//! purpose: This module defines the command-line interface for quay using the clap
//!     derive macros. It specifies all subcommands (dispatch, tokens, list) and their
//!     arguments.
//!
//! when-editing:
//!     - !Each subcommand struct must derive Args and be added to the Commands enum
//!     - !Global flags (manifest, verbose) are defined on Cli and propagate to all subcommands
//!     - The raw line arguments use trailing_var_arg so option-looking words pass through to the tokenizer untouched
//!
//! invariants:
//!     - The Cli struct is the root parser that clap uses to parse command-line arguments
//!     - Each subcommand has its own Args struct with typed fields
//!
//! do-not:
//!     - Never add flags to DispatchArgs/TokensArgs that could collide with words in a raw command line; put new flags before the LINE capture or on Cli
//!
//! gotchas:
//!     - Flags for quay itself (like --json) must come before the raw line; once LINE capture starts, everything after is part of the line
//!     - The --manifest flag is global but optional; defaults to quay.toml in main.rs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quay")]
#[command(author, version, about = "Command-line request router and argument binder")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the command manifest (defaults to quay.toml)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a request from a raw command line and print the outcome
    Dispatch(DispatchArgs),

    /// Tokenize an argument string and print the raw tokens
    Tokens(TokensArgs),

    /// List the commands registered in the manifest
    List(ListArgs),
}

#[derive(Args)]
pub struct DispatchArgs {
    /// Print the built request as JSON
    #[arg(long)]
    pub json: bool,

    /// The command line to build: identifier followed by arguments
    #[arg(
        value_name = "LINE",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub line: Vec<String>,
}

#[derive(Args)]
pub struct TokensArgs {
    /// Print the tokens as JSON
    #[arg(long)]
    pub json: bool,

    /// The argument string to tokenize (the part after a command identifier)
    #[arg(
        value_name = "LINE",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub line: Vec<String>,
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// Print the command list as JSON
    #[arg(long)]
    pub json: bool,
}
