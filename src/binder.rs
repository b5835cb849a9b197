//! @dose
//! purpose: Maps a raw token stream onto a command's declared parameter list. Handles
//!     case-insensitive name matching, boolean/array/string coercion, the named vs.
//!     positional exclusion rule for required parameters, and collection of exceeding
//!     arguments.
//!
//! when-editing:
//!     - !The positional cursor counts satisfied required parameters, not consumed positionals - binding a required parameter by name also consumes its slot
//!     - !Boolean candidate words use the {true,1,y}/{false,0,n} literal sets; inline `=` values coerce with the narrower true/1 rule
//!     - Unknown option names degrade to positionals: the full lexeme first, then any tentatively consumed candidate word
//!
//! invariants:
//!     - The first required binding fixes the mode; a required binding in the opposite mode is an error, never a silent reinterpretation
//!     - Optional parameters bound by name never fix or violate the mode
//!     - Bound argument names are always the declared spelling
//!     - Positional values bind verbatim - no coercion, and never to optional parameters
//!
//! gotchas:
//!     - A bare flag on a string-typed parameter binds boolean true; on an array-typed parameter it appends the string "true"
//!     - Re-binding a non-array name overwrites the value but keeps its position in the result map
//!     - A released candidate word re-enters the stream as a positional right after its option

use crate::tokenizer::{OptionToken, OptionValue, RawToken};
use crate::types::{ArgumentValue, Arguments, ParameterKind, ParameterSpec};
use thiserror::Error;

/// How required arguments arrive within one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingMode {
    /// Required arguments are passed as `--name value` options
    Named,
    /// Required arguments are passed as bare values in declaration order
    Positional,
}

/// Why binding failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// Required arguments were supplied both by name and by position
    #[error("{}", mixing_message(.mode, .argument))]
    InvalidArgumentMixing {
        /// The mode the invocation had already committed to
        mode: BindingMode,
        /// The argument name (named arrival) or value (positional arrival)
        /// that violated it
        argument: String,
    },

    /// A required parameter had no binding after all tokens were consumed
    #[error("Required argument \"{argument}\" is missing")]
    MissingArgument { argument: String },
}

fn mixing_message(mode: &BindingMode, argument: &str) -> String {
    match mode {
        BindingMode::Named => format!(
            "Unexpected unnamed argument {:?}: when named arguments are used, all required arguments must be passed by name",
            argument
        ),
        BindingMode::Positional => format!(
            "Unexpected named argument {:?}: when unnamed arguments are used, all required arguments must be passed without a name",
            argument
        ),
    }
}

/// Successful binding result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundArguments {
    /// Parameter name to coerced value, in binding order
    pub arguments: Arguments,
    /// Positional values with no required parameter left to bind to
    pub exceeding: Vec<String>,
}

const TRUE_WORDS: [&str; 3] = ["true", "1", "y"];
const FALSE_WORDS: [&str; 3] = ["false", "0", "n"];

/// Resolve a boolean option's value. Returns the bound value plus a candidate
/// word to release as a positional when it is not a recognized literal.
fn boolean_value(value: &OptionValue) -> (bool, Option<String>) {
    match value {
        OptionValue::Bare => (true, None),
        OptionValue::Assigned(v) => (v.eq_ignore_ascii_case("true") || v == "1", None),
        OptionValue::Candidate(word) => {
            if TRUE_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)) {
                (true, None)
            } else if FALSE_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)) {
                (false, None)
            } else {
                (true, Some(word.clone()))
            }
        }
    }
}

/// Binds token streams against one declared parameter list
pub struct ArgumentBinder<'a> {
    parameters: &'a [ParameterSpec],
}

impl<'a> ArgumentBinder<'a> {
    pub fn new(parameters: &'a [ParameterSpec]) -> Self {
        Self { parameters }
    }

    /// Bind a token stream, producing arguments + exceeding values or the
    /// first classified error
    pub fn bind(&self, tokens: &[RawToken]) -> Result<BoundArguments, BindError> {
        let mut pass = BindPass::new(self.parameters);
        for token in tokens {
            match token {
                RawToken::LongOption(opt) | RawToken::ShortOption(opt) => pass.option(opt)?,
                RawToken::Positional(value) => pass.positional(value.clone())?,
            }
        }
        pass.finish()
    }
}

/// Mutable state for one binding run
struct BindPass<'a> {
    parameters: &'a [ParameterSpec],
    required: Vec<&'a ParameterSpec>,
    arguments: Arguments,
    exceeding: Vec<String>,
    mode: Option<BindingMode>,
    /// Required parameters satisfied so far, by name or by position
    filled_required: usize,
}

impl<'a> BindPass<'a> {
    fn new(parameters: &'a [ParameterSpec]) -> Self {
        Self {
            parameters,
            required: parameters.iter().filter(|p| !p.optional).collect(),
            arguments: Arguments::new(),
            exceeding: Vec::new(),
            mode: None,
            filled_required: 0,
        }
    }

    fn lookup(&self, name: &str) -> Option<&'a ParameterSpec> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    fn option(&mut self, opt: &OptionToken) -> Result<(), BindError> {
        let Some(spec) = self.lookup(&opt.name) else {
            self.positional(opt.text.clone())?;
            if let OptionValue::Candidate(word) = &opt.value {
                self.positional(word.clone())?;
            }
            return Ok(());
        };

        if !spec.optional {
            if self.mode == Some(BindingMode::Positional) {
                return Err(BindError::InvalidArgumentMixing {
                    mode: BindingMode::Positional,
                    argument: spec.name.clone(),
                });
            }
            self.mode = Some(BindingMode::Named);
            self.filled_required += 1;
        }

        match spec.kind {
            ParameterKind::Boolean => {
                let (value, released) = boolean_value(&opt.value);
                self.arguments
                    .insert(spec.name.clone(), ArgumentValue::Bool(value));
                if let Some(word) = released {
                    self.positional(word)?;
                }
            }
            ParameterKind::Array => {
                let item = match &opt.value {
                    OptionValue::Bare => "true".to_string(),
                    OptionValue::Assigned(v) | OptionValue::Candidate(v) => v.clone(),
                };
                self.arguments.push_list_item(spec.name.clone(), item);
            }
            ParameterKind::String => {
                let value = match &opt.value {
                    OptionValue::Bare => ArgumentValue::Bool(true),
                    OptionValue::Assigned(v) | OptionValue::Candidate(v) => {
                        ArgumentValue::Str(v.clone())
                    }
                };
                self.arguments.insert(spec.name.clone(), value);
            }
        }
        Ok(())
    }

    fn positional(&mut self, value: String) -> Result<(), BindError> {
        if self.filled_required < self.required.len() {
            if self.mode == Some(BindingMode::Named) {
                return Err(BindError::InvalidArgumentMixing {
                    mode: BindingMode::Named,
                    argument: value,
                });
            }
            self.mode = Some(BindingMode::Positional);
            let spec = self.required[self.filled_required];
            self.arguments
                .insert(spec.name.clone(), ArgumentValue::Str(value));
            self.filled_required += 1;
        } else {
            self.exceeding.push(value);
        }
        Ok(())
    }

    fn finish(self) -> Result<BoundArguments, BindError> {
        for spec in &self.required {
            if !self.arguments.has(&spec.name) {
                return Err(BindError::MissingArgument {
                    argument: spec.name.clone(),
                });
            }
        }
        Ok(BoundArguments {
            arguments: self.arguments,
            exceeding: self.exceeding,
        })
    }
}
