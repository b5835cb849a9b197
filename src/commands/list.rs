//! @dose
//! purpose: This module implements the list command that prints the commands declared
//!     in the manifest together with their parameter declarations, either as an aligned
//!     text listing or as JSON.
//!
//! when-editing:
//!     - !Commands print in manifest order; parameters print in declaration order
//!     - The JSON form serializes RegisteredCommand directly, so it includes derived controller/command names
//!
//! gotchas:
//!     - Identifier column width is computed from the longest identifier in the manifest

use crate::cli::ListArgs;
use crate::manifest::Manifest;
use anyhow::Result;
use std::path::Path;

pub fn run_list(args: &ListArgs, manifest_path: &Path, verbose: bool) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;

    if verbose {
        println!(
            "Loaded {} commands from {}",
            manifest.commands().len(),
            manifest_path.display()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(manifest.commands())?);
        return Ok(());
    }

    if manifest.commands().is_empty() {
        println!("No commands registered");
        return Ok(());
    }

    let width = manifest
        .commands()
        .iter()
        .map(|c| c.identifier.len())
        .max()
        .unwrap_or(0);

    for command in manifest.commands() {
        if command.description.is_empty() {
            println!("{}", command.identifier);
        } else {
            println!("{:width$}  {}", command.identifier, command.description);
        }
        for parameter in &command.parameters {
            let requirement = if parameter.optional {
                "optional"
            } else {
                "required"
            };
            println!("    --{} ({}, {})", parameter.name, parameter.kind, requirement);
        }
    }

    Ok(())
}
