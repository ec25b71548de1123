use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;

/// Ordered list of command-line arguments handed to an external process.
///
/// Arguments are kept exactly in insertion order. No deduplication or
/// validation happens here; the wrapped tool decides what is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArguments(Vec<String>);

impl CommandArguments {
    /// Create new empty arguments
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create from a vector of strings
    #[must_use]
    pub fn from_vec(args: Vec<String>) -> Self {
        Self(args)
    }

    /// Add an argument
    pub fn push(&mut self, arg: impl Into<String>) {
        self.0.push(arg.into());
    }

    /// Add multiple arguments
    pub fn extend<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(args.into_iter().map(Into::into));
    }

    /// Get the number of arguments
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no arguments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to inner Vec
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Get a slice of the arguments
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Deref for CommandArguments {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for CommandArguments {
    fn from(args: Vec<String>) -> Self {
        Self(args)
    }
}

impl IntoIterator for CommandArguments {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for CommandArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// The dynamic type of a JSON value.
///
/// Integers and floats are distinct kinds: replacing `1` with `1.5` counts
/// as a type change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a JSON value
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(n) if n.is_f64() => JsonKind::Float,
            Value::Number(_) => JsonKind::Integer,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// Returns true if both values share the same kind
    #[must_use]
    pub fn same(a: &Value, b: &Value) -> bool {
        Self::of(a) == Self::of(b)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Float => "float",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_json_kind_classification() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(2)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(-2)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(2.5)), JsonKind::Float);
        assert_eq!(JsonKind::of(&json!("1.0.0.0")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([1, 2])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({"a": 1})), JsonKind::Object);
    }

    #[test]
    fn test_json_kind_equality() {
        assert!(JsonKind::same(&json!("a"), &json!("b")));
        assert!(!JsonKind::same(&json!("1.0.0.0"), &json!(2)));
        assert!(!JsonKind::same(&json!(1), &json!(1.5)));
    }

    #[test]
    fn test_command_arguments_display() {
        let mut args = CommandArguments::new();
        args.push("test");
        args.extend(["-f", "net8.0"]);
        assert_eq!(args.to_string(), "test -f net8.0");
        assert_eq!(args.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_arguments_keep_insertion_order(tokens in proptest::collection::vec("[a-z-]{1,8}", 0..20)) {
            let mut args = CommandArguments::new();
            for token in &tokens {
                args.push(token.clone());
            }
            prop_assert_eq!(args.into_inner(), tokens);
        }
    }
}
