//! @toon
//! purpose: The build entry point: split a raw command line into identifier and
//!     argument tail, resolve the identifier through the injected resolver, fetch the
//!     command's declared parameters, and run tokenizer + binder to produce the final
//!     CliRequest. Also owns the help fallbacks for empty and unresolvable lines.
//!
//! when-editing:
//!     - !Collaborators come in through the CommandResolver and ParameterSource traits - nothing here looks anything up globally
//!     - !Resolution failure is not an error from build: it becomes an error request against the help target carrying the message under the "exception" argument
//!     - Parameter lookup uses the commandName + "Command" method convention
//!
//! invariants:
//!     - A bind error aborts the build; a resolution miss never does
//!     - The identifier is taken verbatim up to the first whitespace run - no unquoting applies to it
//!     - Fallback requests carry no exceeding arguments
//!
//! gotchas:
//!     - An empty (or whitespace-only) line yields the helpStub request, not an error
//!     - The help target is a plain controller identity string; the dispatcher decides what it means

use crate::binder::{ArgumentBinder, BindError};
use crate::registry::{CommandResolver, NoSuchCommand, ParameterSource};
use crate::tokenizer::tokenize;
use crate::types::{ArgumentValue, Arguments, CliRequest};

/// Default fallback controller identity for help and error requests
pub const DEFAULT_HELP_TARGET: &str = "help";
/// Command name on the fallback controller when the line is empty
pub const HELP_STUB_COMMAND: &str = "helpStub";
/// Command name on the fallback controller when resolution fails
pub const HELP_ERROR_COMMAND: &str = "error";
/// Argument carrying the resolution error message on an error request
pub const EXCEPTION_ARGUMENT: &str = "exception";

/// Builds CliRequests from raw command lines
pub struct RequestBuilder<R, P> {
    resolver: R,
    parameters: P,
    help_target: String,
}

impl<R: CommandResolver, P: ParameterSource> RequestBuilder<R, P> {
    pub fn new(resolver: R, parameters: P) -> Self {
        Self {
            resolver,
            parameters,
            help_target: DEFAULT_HELP_TARGET.to_string(),
        }
    }

    /// Override the controller identity used for help and error fallbacks
    pub fn with_help_target(mut self, controller_name: impl Into<String>) -> Self {
        self.help_target = controller_name.into();
        self
    }

    pub fn help_target(&self) -> &str {
        &self.help_target
    }

    /// Build a request from a full command line (identifier plus argument tail).
    ///
    /// An empty line yields the help stub request; an unresolvable identifier
    /// yields the error request. Only binding failures surface as errors.
    pub fn build(&self, command_line: &str) -> Result<CliRequest, BindError> {
        let (identifier, tail) = split_command_line(command_line);
        if identifier.is_empty() {
            return Ok(self.help_stub_request());
        }

        let command = match self.resolver.resolve(identifier) {
            Ok(descriptor) => descriptor,
            Err(error) => return Ok(self.error_request(&error)),
        };

        let method_name = format!("{}Command", command.command_name);
        let specs = self
            .parameters
            .parameters(&command.controller_name, &method_name);
        let bound = ArgumentBinder::new(&specs).bind(&tokenize(tail))?;

        Ok(CliRequest::new(
            command.controller_name,
            command.command_name,
            bound.arguments,
            bound.exceeding,
        ))
    }

    fn help_stub_request(&self) -> CliRequest {
        CliRequest::new(
            self.help_target.clone(),
            HELP_STUB_COMMAND,
            Arguments::new(),
            Vec::new(),
        )
    }

    fn error_request(&self, error: &NoSuchCommand) -> CliRequest {
        let mut arguments = Arguments::new();
        arguments.insert(EXCEPTION_ARGUMENT, ArgumentValue::Str(error.to_string()));
        CliRequest::new(
            self.help_target.clone(),
            HELP_ERROR_COMMAND,
            arguments,
            Vec::new(),
        )
    }
}

/// Split a command line at the first whitespace run; the remainder keeps its
/// own internal spacing
fn split_command_line(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((identifier, tail)) => (identifier, tail.trim_start()),
        None => (line, ""),
    }
}
