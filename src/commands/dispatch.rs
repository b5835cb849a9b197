//! @toon
//! purpose: This module implements the dispatch command that turns a raw command line
//!     into a bound CliRequest using the manifest's registry, then prints the outcome
//!     as a human-readable summary or as JSON.
//!
//! when-editing:
//!     - !The line words are re-joined with single spaces before building; quoting is the tokenizer's job
//!     - !Unresolvable identifiers still build successfully (help/error fallback requests); only binding failures exit nonzero
//!     - JSON output serializes the full request including exceeding arguments
//!
//! invariants:
//!     - The manifest is loaded fresh on every run; there is no caching between invocations
//!     - Argument coercion happens entirely in the binder; this module only presents the result
//!
//! gotchas:
//!     - Shell quoting is consumed before the words reach quay; to exercise the quote rules,
//!       quote for the shell so the inner quotes survive (e.g. "--message='hello world'")
//!
//! flows:
//!     - Load: Read and validate the manifest into a CommandRegistry
//!     - Build: Resolve the identifier, tokenize the tail, bind arguments
//!     - Print: Render the request fields, or the serialized request with --json

use crate::cli::DispatchArgs;
use crate::manifest::Manifest;
use crate::types::CliRequest;
use anyhow::Result;
use std::path::Path;

pub fn run_dispatch(args: &DispatchArgs, manifest_path: &Path, verbose: bool) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;

    let command_line = args.line.join(" ");
    if verbose {
        println!(
            "Building request from {:?} ({} commands registered)",
            command_line,
            manifest.commands().len()
        );
    }

    let request = manifest.builder().build(&command_line)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        print_request(&request);
    }

    Ok(())
}

fn print_request(request: &CliRequest) {
    println!("controller: {}", request.controller_name());
    println!("command:    {}", request.command_name());

    if request.arguments().is_empty() {
        println!("arguments:  (none)");
    } else {
        println!("arguments:");
        for (name, value) in request.arguments().iter() {
            println!("  {} = {}", name, value);
        }
    }

    if request.has_exceeding_arguments() {
        println!("exceeding:");
        for value in request.exceeding_arguments() {
            println!("  {:?}", value);
        }
    }
}
