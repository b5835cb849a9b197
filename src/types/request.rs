//! @toon
//! purpose: The bound request produced by a successful build: a typed argument value,
//!     an insertion-ordered argument map, and the immutable CliRequest handed to the
//!     dispatcher. Everything here is constructed by the binder/builder and read-only
//!     to consumers.
//!
//! when-editing:
//!     - !Arguments preserves insertion order - it serializes and iterates in the order names were first bound
//!     - !Re-inserting an existing name overwrites the value but keeps the original position
//!     - CliRequest fields stay private; consumers go through the accessor methods
//!
//! invariants:
//!     - Argument names in a request are the declared parameter names, never the user's spelling
//!     - Exceeding arguments keep encounter order and are never bound to a name
//!
//! gotchas:
//!     - The map is Vec-backed; lookups are linear scans, which is fine at command-line sizes
//!     - ArgumentValue serializes untagged: strings as strings, booleans as booleans, lists as arrays

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A coerced argument value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    /// Plain string value
    Str(String),
    /// Coerced boolean value
    Bool(bool),
    /// Accumulated values of an array-typed parameter
    List(Vec<String>),
}

impl ArgumentValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgumentValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ArgumentValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::Str(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::Str(value)
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        ArgumentValue::Bool(value)
    }
}

impl From<Vec<String>> for ArgumentValue {
    fn from(values: Vec<String>) -> Self {
        ArgumentValue::List(values)
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Str(s) => write!(f, "{:?}", s),
            ArgumentValue::Bool(b) => write!(f, "{}", b),
            ArgumentValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Insertion-ordered map from parameter name to bound value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    entries: Vec<(String, ArgumentValue)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Bind a value, overwriting in place if the name is already present
    pub fn insert(&mut self, name: impl Into<String>, value: ArgumentValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Append one item to an array-typed binding, creating the list on first use
    pub fn push_list_item(&mut self, name: impl Into<String>, item: impl Into<String>) {
        let name = name.into();
        let item = item.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, ArgumentValue::List(items))) => items.push(item),
            Some(entry) => entry.1 = ArgumentValue::List(vec![item]),
            None => self.entries.push((name, ArgumentValue::List(vec![item]))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl FromIterator<(String, ArgumentValue)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (String, ArgumentValue)>>(iter: T) -> Self {
        let mut arguments = Arguments::new();
        for (name, value) in iter {
            arguments.insert(name, value);
        }
        arguments
    }
}

impl Serialize for Arguments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The immutable result of building a command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliRequest {
    controller_name: String,
    command_name: String,
    arguments: Arguments,
    exceeding_arguments: Vec<String>,
}

impl CliRequest {
    pub(crate) fn new(
        controller_name: impl Into<String>,
        command_name: impl Into<String>,
        arguments: Arguments,
        exceeding_arguments: Vec<String>,
    ) -> Self {
        Self {
            controller_name: controller_name.into(),
            command_name: command_name.into(),
            arguments,
            exceeding_arguments,
        }
    }

    /// Controller identity this request targets
    pub fn controller_name(&self) -> &str {
        &self.controller_name
    }

    /// Command name within the controller
    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    /// All bound arguments, in binding order
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// A single bound argument by declared name
    pub fn argument(&self, name: &str) -> Option<&ArgumentValue> {
        self.arguments.get(name)
    }

    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.has(name)
    }

    /// Positional values that had no required parameter left to bind to
    pub fn exceeding_arguments(&self) -> &[String] {
        &self.exceeding_arguments
    }

    pub fn has_exceeding_arguments(&self) -> bool {
        !self.exceeding_arguments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_first_position_on_overwrite() {
        let mut arguments = Arguments::new();
        arguments.insert("first", ArgumentValue::from("a"));
        arguments.insert("second", ArgumentValue::from("b"));
        arguments.insert("first", ArgumentValue::from("c"));

        let names: Vec<&str> = arguments.names().collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(arguments.get("first"), Some(&ArgumentValue::from("c")));
        assert_eq!(arguments.len(), 2);
    }

    #[test]
    fn test_push_list_item_accumulates_in_order() {
        let mut arguments = Arguments::new();
        arguments.push_list_item("roles", "admin");
        arguments.push_list_item("roles", "editor");

        assert_eq!(
            arguments.get("roles"),
            Some(&ArgumentValue::List(vec![
                "admin".to_string(),
                "editor".to_string()
            ]))
        );
    }

    #[test]
    fn test_get_is_exact_match() {
        let mut arguments = Arguments::new();
        arguments.insert("testArgument", ArgumentValue::from(true));
        assert!(arguments.has("testArgument"));
        assert!(!arguments.has("testargument"));
        assert!(arguments.get("missing").is_none());
    }

    #[test]
    fn test_arguments_serialize_in_insertion_order() {
        let mut arguments = Arguments::new();
        arguments.insert("zeta", ArgumentValue::from("z"));
        arguments.insert("alpha", ArgumentValue::from(true));
        arguments.push_list_item("roles", "admin");

        let json = serde_json::to_string(&arguments).unwrap();
        assert_eq!(json, r#"{"zeta":"z","alpha":true,"roles":["admin"]}"#);
    }

    #[test]
    fn test_request_accessors() {
        let mut arguments = Arguments::new();
        arguments.insert("force", ArgumentValue::from(true));
        let request = CliRequest::new(
            "acme.demo:cache",
            "flush",
            arguments,
            vec!["extra".to_string()],
        );

        assert_eq!(request.controller_name(), "acme.demo:cache");
        assert_eq!(request.command_name(), "flush");
        assert_eq!(request.argument("force"), Some(&ArgumentValue::Bool(true)));
        assert!(request.has_argument("force"));
        assert!(!request.has_argument("quiet"));
        assert_eq!(request.exceeding_arguments(), ["extra".to_string()]);
        assert!(request.has_exceeding_arguments());
    }

    #[test]
    fn test_argument_value_display() {
        assert_eq!(ArgumentValue::from("hi there").to_string(), "\"hi there\"");
        assert_eq!(ArgumentValue::from(false).to_string(), "false");
        assert_eq!(
            ArgumentValue::List(vec!["a".to_string(), "b".to_string()]).to_string(),
            "[\"a\", \"b\"]"
        );
    }
}
