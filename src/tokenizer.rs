//! @toon
//! purpose: Lexical pass over the argument tail of a command line. Splits the input
//!     into words (resolving quotes and backslash escapes), then assembles words into
//!     raw tokens: long options, short options, and positionals, with `=` assignments
//!     glued across words in all three spacing forms.
//!
//! when-editing:
//!     - !No ParameterSpec knowledge here - classifying candidate values is the binder's job
//!     - !Option names are converted from hyphen-case to camelCase at token assembly
//!     - OptionToken.text keeps the full unescaped lexeme so an unknown option can degrade to a positional later
//!
//! invariants:
//!     - Tokens come out in input order
//!     - A word that begins inside quotes is a positional, whatever its content
//!     - `--x=v`, `--x= v`, `--x =v` and `--x = v` all assign the value v
//!     - An option with no assignment tentatively consumes a following non-option word as its candidate value
//!
//! gotchas:
//!     - Escapes differ by context: inside quotes only the same-kind quote can be escaped; outside, backslash escapes spaces, both quote kinds, and itself, and stays literal before anything else
//!     - A short option name may be longer than one character (-option=value names the parameter "option")
//!     - The `=` that opens an assignment must sit outside quotes; quoted equal signs are plain text

use serde::Serialize;
use std::fmt;
use std::iter::Peekable;
use std::vec;

/// How a value arrived at an option token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionValue {
    /// No value was supplied
    Bare,
    /// Explicitly attached via `=` in any spacing form
    Assigned(String),
    /// The following bare word, consumed tentatively; the binder releases it
    /// again when the option is boolean-typed or matches no parameter
    Candidate(String),
}

/// An option token with its resolved name and attached value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionToken {
    /// camelCase parameter name derived from the lexeme
    pub name: String,
    /// Attached value, if any
    pub value: OptionValue,
    /// Full unescaped lexeme including any glued assignment
    pub text: String,
}

/// One element of the tokenized argument tail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RawToken {
    /// `--name` style option
    LongOption(OptionToken),
    /// `-n` style option
    ShortOption(OptionToken),
    /// A bare value
    Positional(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bare => Ok(()),
            OptionValue::Assigned(value) => write!(f, "={:?}", value),
            OptionValue::Candidate(value) => write!(f, " {:?}?", value),
        }
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawToken::LongOption(opt) => write!(f, "--{}{}", opt.name, opt.value),
            RawToken::ShortOption(opt) => write!(f, "-{}{}", opt.name, opt.value),
            RawToken::Positional(value) => write!(f, "{:?}", value),
        }
    }
}

/// One whitespace-delimited word after quote/escape resolution
struct Word {
    /// Unescaped text
    text: String,
    /// Byte position in text of the first `=` seen outside quotes
    first_eq: Option<usize>,
    /// Whether the word began with an unquoted, unescaped dash
    option_like: bool,
}

/// Split the input into words, resolving quotes and escapes.
///
/// Inside single quotes only `\'` unescapes; inside double quotes only `\"`.
/// Outside quotes `\ `, `\'`, `\"` and `\\` unescape and anything else after a
/// backslash stays literal. Escaped spaces and quoted regions do not end a word.
fn split_words(input: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut text = String::new();
    let mut first_eq: Option<usize> = None;
    let mut option_like = false;
    let mut in_word = false;
    let mut quote: Option<char> = None;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            if ch == '\\' && chars.peek() == Some(&q) {
                text.push(q);
                chars.next();
            } else if ch == q {
                quote = None;
            } else {
                text.push(ch);
            }
            continue;
        }

        match ch {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(Word {
                        text: std::mem::take(&mut text),
                        first_eq: first_eq.take(),
                        option_like,
                    });
                    in_word = false;
                    option_like = false;
                }
            }
            '\'' | '"' => {
                in_word = true;
                quote = Some(ch);
            }
            '\\' => {
                in_word = true;
                match chars.peek() {
                    Some(&next) if matches!(next, ' ' | '\'' | '"' | '\\') => {
                        text.push(next);
                        chars.next();
                    }
                    _ => text.push('\\'),
                }
            }
            '=' => {
                if first_eq.is_none() {
                    first_eq = Some(text.len());
                }
                in_word = true;
                text.push('=');
            }
            '-' => {
                if !in_word {
                    option_like = true;
                }
                in_word = true;
                text.push('-');
            }
            _ => {
                in_word = true;
                text.push(ch);
            }
        }
    }

    if in_word || quote.is_some() {
        words.push(Word {
            text,
            first_eq,
            option_like,
        });
    }
    words
}

/// Tokenize the argument tail of a command line.
///
/// The input is everything after the command identifier. Produces tokens in
/// input order; no parameter validation happens here.
pub fn tokenize(input: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut words = split_words(input).into_iter().peekable();
    while let Some(word) = words.next() {
        if word.option_like {
            tokens.push(option_token(word, &mut words));
        } else {
            tokens.push(RawToken::Positional(word.text));
        }
    }
    tokens
}

/// Assemble one option token, consuming following words for glued `=` forms
/// and candidate values.
fn option_token(word: Word, rest: &mut Peekable<vec::IntoIter<Word>>) -> RawToken {
    let long = word.text.starts_with("--");
    let mut text = word.text;
    let name_end;
    let value;

    if let Some(eq) = word.first_eq {
        name_end = eq;
        let inline = text[eq + 1..].to_string();
        if !inline.is_empty() {
            value = OptionValue::Assigned(inline);
        } else if let Some(next) = rest.next() {
            // `--x=` with the value in the next word, taken as-is
            text.push_str(&next.text);
            value = OptionValue::Assigned(next.text);
        } else {
            value = OptionValue::Assigned(String::new());
        }
    } else {
        name_end = text.len();
        if let Some(next) = rest.next_if(|w| w.first_eq == Some(0)) {
            // a separate word opening the assignment: `=v` or a lone `=`
            let assigned = next.text[1..].to_string();
            text.push_str(&next.text);
            if !assigned.is_empty() {
                value = OptionValue::Assigned(assigned);
            } else if let Some(value_word) = rest.next() {
                text.push_str(&value_word.text);
                value = OptionValue::Assigned(value_word.text);
            } else {
                value = OptionValue::Assigned(String::new());
            }
        } else if let Some(next) = rest.next_if(|w| !w.option_like) {
            value = OptionValue::Candidate(next.text);
        } else {
            value = OptionValue::Bare;
        }
    }

    let name = parameter_name(&text[..name_end]);
    let token = OptionToken { name, value, text };
    if long {
        RawToken::LongOption(token)
    } else {
        RawToken::ShortOption(token)
    }
}

/// Derive the camelCase parameter name from an option lexeme
fn parameter_name(lexeme: &str) -> String {
    let stripped = lexeme
        .strip_prefix("--")
        .or_else(|| lexeme.strip_prefix('-'))
        .unwrap_or(lexeme);
    camel_case(stripped)
}

/// Convert hyphen-case to camelCase; hyphen-free names pass through unchanged
fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, segment) in name.split('-').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}
