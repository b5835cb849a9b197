//! Collaborator seams for request building: the resolver and parameter-source
//! traits, plus an in-memory registry implementing both for manifest-driven
//! and test use. Command discovery itself lives outside this crate; anything
//! that can resolve identifiers and report parameters can drive the builder.

use crate::types::{CommandDescriptor, ParameterSpec};
use serde::Serialize;
use thiserror::Error;

/// Raised when an identifier resolves to no registered command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No command could be found that matches the identifier {identifier:?}")]
pub struct NoSuchCommand {
    pub identifier: String,
}

/// Resolves a command identifier to its descriptor
pub trait CommandResolver {
    fn resolve(&self, identifier: &str) -> Result<CommandDescriptor, NoSuchCommand>;
}

/// Reports the declared parameters of a command method
pub trait ParameterSource {
    /// Parameters in declaration order; empty when the pair is unknown
    fn parameters(&self, controller_name: &str, command_method_name: &str) -> Vec<ParameterSpec>;
}

impl<T: CommandResolver + ?Sized> CommandResolver for &T {
    fn resolve(&self, identifier: &str) -> Result<CommandDescriptor, NoSuchCommand> {
        (**self).resolve(identifier)
    }
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn parameters(&self, controller_name: &str, command_method_name: &str) -> Vec<ParameterSpec> {
        (**self).parameters(controller_name, command_method_name)
    }
}

/// One command known to the in-memory registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredCommand {
    /// Full identifier (package:controller:command)
    pub identifier: String,
    /// Controller identity derived from the identifier (package:controller)
    pub controller_name: String,
    /// Command name, the identifier's last segment
    pub command_name: String,
    /// One-line description for listings
    pub description: String,
    /// Declared parameters in declaration order
    pub parameters: Vec<ParameterSpec>,
}

impl RegisteredCommand {
    /// Build from a `package:controller:command` identifier. Returns None when
    /// the identifier does not have exactly three nonempty segments.
    pub fn from_identifier(
        identifier: impl Into<String>,
        parameters: Vec<ParameterSpec>,
    ) -> Option<Self> {
        let identifier = identifier.into();
        let (controller_name, command_name) = split_identifier_parts(&identifier)?;
        Some(Self {
            identifier,
            controller_name,
            command_name,
            description: String::new(),
            parameters,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The reflection-style method name parameter lookup uses
    pub fn command_method_name(&self) -> String {
        format!("{}Command", self.command_name)
    }
}

/// Split package:controller:command into (package:controller, command)
fn split_identifier_parts(identifier: &str) -> Option<(String, String)> {
    let mut segments = identifier.split(':');
    let package = segments.next()?;
    let controller = segments.next()?;
    let command = segments.next()?;
    if segments.next().is_some()
        || package.is_empty()
        || controller.is_empty()
        || command.is_empty()
    {
        return None;
    }
    Some((format!("{}:{}", package, controller), command.to_string()))
}

/// In-memory command registry serving both collaborator seams
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: RegisteredCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    /// Exact identifier match, case-insensitive
    pub fn find(&self, identifier: &str) -> Option<&RegisteredCommand> {
        self.commands
            .iter()
            .find(|c| c.identifier.eq_ignore_ascii_case(identifier))
    }
}

impl CommandResolver for CommandRegistry {
    fn resolve(&self, identifier: &str) -> Result<CommandDescriptor, NoSuchCommand> {
        self.find(identifier)
            .map(|c| CommandDescriptor::new(c.controller_name.clone(), c.command_name.clone()))
            .ok_or_else(|| NoSuchCommand {
                identifier: identifier.to_string(),
            })
    }
}

impl ParameterSource for CommandRegistry {
    fn parameters(&self, controller_name: &str, command_method_name: &str) -> Vec<ParameterSpec> {
        self.commands
            .iter()
            .find(|c| {
                c.controller_name.eq_ignore_ascii_case(controller_name)
                    && c.command_method_name()
                        .eq_ignore_ascii_case(command_method_name)
            })
            .map(|c| c.parameters.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParameterKind;

    fn sample_registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(
            RegisteredCommand::from_identifier(
                "acme.demo:cache:flush",
                vec![ParameterSpec::optional("force", ParameterKind::Boolean)],
            )
            .unwrap()
            .with_description("Remove all cache entries"),
        );
        registry
    }

    #[test]
    fn test_identifier_derives_controller_and_command() {
        let command =
            RegisteredCommand::from_identifier("acme.demo:cache:flush", Vec::new()).unwrap();
        assert_eq!(command.controller_name, "acme.demo:cache");
        assert_eq!(command.command_name, "flush");
        assert_eq!(command.command_method_name(), "flushCommand");
    }

    #[test]
    fn test_malformed_identifiers_are_rejected() {
        assert!(RegisteredCommand::from_identifier("acme.demo:cache", Vec::new()).is_none());
        assert!(RegisteredCommand::from_identifier("a:b:c:d", Vec::new()).is_none());
        assert!(RegisteredCommand::from_identifier("a::c", Vec::new()).is_none());
        assert!(RegisteredCommand::from_identifier("", Vec::new()).is_none());
    }

    #[test]
    fn test_resolve_matches_case_insensitively() {
        let registry = sample_registry();

        let descriptor = registry.resolve("acme.demo:cache:flush").unwrap();
        assert_eq!(descriptor.controller_name, "acme.demo:cache");
        assert_eq!(descriptor.command_name, "flush");

        let descriptor = registry.resolve("Acme.Demo:Cache:Flush").unwrap();
        assert_eq!(descriptor.command_name, "flush");
    }

    #[test]
    fn test_resolve_unknown_identifier_fails() {
        let registry = sample_registry();
        let err = registry.resolve("acme.demo:cache:warmup").unwrap_err();
        assert_eq!(err.identifier, "acme.demo:cache:warmup");
        assert!(err.to_string().contains("acme.demo:cache:warmup"));
    }

    #[test]
    fn test_parameters_lookup_uses_method_name_convention() {
        let registry = sample_registry();

        let parameters = registry.parameters("acme.demo:cache", "flushCommand");
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name, "force");

        assert!(registry.parameters("acme.demo:cache", "warmupCommand").is_empty());
        assert!(registry.parameters("other:cache", "flushCommand").is_empty());
    }
}
