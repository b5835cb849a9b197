//! @dose
//! purpose: This is the CLI entry point for quay. It parses command-line arguments using
//!     clap, determines the manifest path, and dispatches to the appropriate command
//!     handler (dispatch, tokens, or list).
//!
//! when-editing:
//!     - !All command handlers are imported from the quay crate
//!     - !The manifest path defaults to quay.toml in the current directory if not specified
//!     - Error messages are printed to stderr and exit with code 1
//!
//! invariants:
//!     - One and only one subcommand is always executed per invocation
//!     - The process exits with 0 on success, 1 on any error
//!
//! do-not:
//!     - Never add business logic here - delegate to command modules
//!     - Never panic - always use proper error handling
//!
//! gotchas:
//!     - The --manifest flag can be placed before or after the subcommand due to global flag
//!     - Verbose mode is also a global flag that affects all commands
//!     - The tokens command never touches the manifest, so a missing quay.toml does not stop it

use clap::Parser;
use quay::cli::{Cli, Commands};
use quay::commands::{run_dispatch, run_list, run_tokens};
use quay::manifest::DEFAULT_MANIFEST;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine manifest path
    let manifest_path = match cli.manifest {
        Some(path) => path,
        None => PathBuf::from(DEFAULT_MANIFEST),
    };

    match cli.command {
        Commands::Dispatch(args) => run_dispatch(&args, &manifest_path, cli.verbose),
        Commands::Tokens(args) => run_tokens(&args, cli.verbose),
        Commands::List(args) => run_list(&args, &manifest_path, cli.verbose),
    }
}
