//! @dose
//! purpose: Command metadata types shared between the binder, the registry, and the
//!     manifest: the descriptor a resolved identifier maps to, and the parameter
//!     declarations a command exposes for argument binding.
//!
//! when-editing:
//!     - !ParameterSpec declaration order is significant - positional binding walks it
//!     - !ParameterKind names must stay in sync with the manifest's type strings
//!
//! invariants:
//!     - A parameter is either required (optional = false) or optional; there is no default-value concept here
//!     - Kind defaults to string when the manifest omits it
//!
//! gotchas:
//!     - Parameter names are camelCase by convention; matching against user input is case-insensitive, but bound results always use the declared spelling

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a command identifier resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    /// Controller identity (e.g., "acme.demo:cache")
    pub controller_name: String,
    /// Command name within the controller (e.g., "flush")
    pub command_name: String,
}

impl CommandDescriptor {
    pub fn new(controller_name: impl Into<String>, command_name: impl Into<String>) -> Self {
        Self {
            controller_name: controller_name.into(),
            command_name: command_name.into(),
        }
    }
}

/// Declared type of a command parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Plain string value (the default)
    #[default]
    String,
    /// Boolean flag with implicit true / explicit literal values
    Boolean,
    /// Repeatable option accumulating string values in occurrence order
    Array,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::String => write!(f, "string"),
            ParameterKind::Boolean => write!(f, "boolean"),
            ParameterKind::Array => write!(f, "array"),
        }
    }
}

/// A single declared command parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Declared parameter name (camelCase)
    pub name: String,
    /// Whether the parameter may be omitted
    #[serde(default)]
    pub optional: bool,
    /// Declared value type
    #[serde(rename = "type", default)]
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// A required parameter of the given kind
    pub fn required(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            optional: false,
            kind,
        }
    }

    /// An optional parameter of the given kind
    pub fn optional(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            optional: true,
            kind,
        }
    }
}
