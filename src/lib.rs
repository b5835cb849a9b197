//! @toon
//! purpose: This is the library crate root for quay, exposing the public API for use as
//!     both a CLI tool and a library. It re-exports key types and functions from all
//!     modules for convenient access by consumers.
//!
//! when-editing:
//!     - !All public modules must be declared here with pub mod
//!     - !Re-exports should include commonly used types and functions
//!     - Keep the re-export list organized by module
//!
//! invariants:
//!     - The public API surface is stable - all re-exported items are public contract
//!     - Custom resolvers and parameter sources plug in through the registry traits
//!
//! do-not:
//!     - Never remove a re-export without major version bump (breaking change)
//!     - Never expose internal implementation details
//!
//! gotchas:
//!     - The lib.rs is separate from main.rs - library consumers get lib, CLI gets main
//!     - Raw tokens and OptionValue are exported so callers can inspect tokenizer output directly

pub mod binder;
pub mod builder;
pub mod cli;
pub mod commands;
pub mod manifest;
pub mod registry;
pub mod tokenizer;
pub mod types;

// Re-export main types for convenience
pub use binder::{ArgumentBinder, BindError, BindingMode, BoundArguments};
pub use builder::RequestBuilder;
pub use cli::{Cli, Commands, DispatchArgs, ListArgs, TokensArgs};
pub use manifest::{Manifest, ManifestError, DEFAULT_MANIFEST};
pub use registry::{
    CommandRegistry, CommandResolver, NoSuchCommand, ParameterSource, RegisteredCommand,
};
pub use tokenizer::{tokenize, OptionToken, OptionValue, RawToken};
pub use types::{
    ArgumentValue, Arguments, CliRequest, CommandDescriptor, ParameterKind, ParameterSpec,
};
