//! @dose
//! purpose: TOML manifest parsing for quay.toml. A manifest declares the commands the
//!     demo binary serves: identifiers, descriptions, parameter lists, and the optional
//!     fallback help target. Loading produces a ready CommandRegistry.
//!
//! when-editing:
//!     - !Parameter tables reuse ParameterSpec's serde shape - "type" with string/boolean/array, optional defaulting to false
//!     - !Identifiers are validated to the three-segment package:controller:command form at load time
//!     - Loading is strict: a missing or unparsable manifest is an error, never a silent empty registry
//!
//! invariants:
//!     - Every command in a loaded manifest has a derivable controller identity and command name
//!     - Parameter declaration order in the TOML is the binding order
//!
//! gotchas:
//!     - help_target is a plain controller identity string; when absent, the builder's default applies

use crate::builder::RequestBuilder;
use crate::registry::{CommandRegistry, RegisteredCommand};
use crate::types::ParameterSpec;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file name looked up by default
pub const DEFAULT_MANIFEST: &str = "quay.toml";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Command identifier {identifier:?} must have the form package:controller:command")]
    InvalidIdentifier { identifier: String },
}

/// Raw TOML shape of a manifest file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ManifestFile {
    help_target: Option<String>,
    command: Vec<CommandEntry>,
}

/// One [[command]] table
#[derive(Debug, Deserialize)]
struct CommandEntry {
    identifier: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameter: Vec<ParameterSpec>,
}

/// A loaded and validated command manifest
#[derive(Debug, Default)]
pub struct Manifest {
    /// Fallback controller identity for help and error requests
    pub help_target: Option<String>,
    registry: CommandRegistry,
}

impl Manifest {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse manifest text; the path only feeds error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let file: ManifestFile =
            toml::from_str(content).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut registry = CommandRegistry::new();
        for entry in file.command {
            let command =
                RegisteredCommand::from_identifier(entry.identifier.clone(), entry.parameter)
                    .map(|c| c.with_description(entry.description))
                    .ok_or(ManifestError::InvalidIdentifier {
                        identifier: entry.identifier,
                    })?;
            registry.register(command);
        }

        Ok(Self {
            help_target: file.help_target,
            registry,
        })
    }

    /// The registry built from the manifest's commands
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Registered commands in manifest order
    pub fn commands(&self) -> &[RegisteredCommand] {
        self.registry.commands()
    }

    /// A request builder over this manifest's registry, honoring help_target
    pub fn builder(&self) -> RequestBuilder<&CommandRegistry, &CommandRegistry> {
        let builder = RequestBuilder::new(&self.registry, &self.registry);
        match &self.help_target {
            Some(target) => builder.with_help_target(target.clone()),
            None => builder,
        }
    }
}
