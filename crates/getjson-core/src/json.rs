//! # JSON Value Model
//!
//! In-memory JSON tree as a closed tagged union, with single-line
//! serialization and shallow functional transforms.
//!
//! ## Invariants
//!
//! - Every node is immutable once built; `map`/`filter` produce new
//!   trees instead of mutating in place.
//! - Object entries preserve insertion order. Key uniqueness is NOT
//!   enforced at construction time; see
//!   [`UniqueKeysValidator`](crate::validation::UniqueKeysValidator).
//! - Serialization escapes embedded `"` as `\"` and nothing else.
//!   Backslashes and control characters are emitted verbatim (a known
//!   limitation, pinned by tests).

use std::fmt;

/// A numeric JSON value, either integer or floating.
///
/// The original numeric value is held unmodified; there is no coercion
/// to a single representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Fixed-width integer value
    Int(i64),
    /// Floating point value
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// The JSON kind of a node, one tag per variant of [`JsonValue`].
///
/// Used where two nodes must be compared by kind rather than by value,
/// e.g. the homogeneous-array validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// A string node
    String,
    /// A numeric node (integer or floating)
    Number,
    /// A boolean node
    Bool,
    /// The null node
    Null,
    /// An array node
    Array,
    /// An object node
    Object,
}

/// A JSON value: the closed set of node kinds forming a JSON tree.
///
/// Objects are an ordered entry list rather than a map so that
/// insertion order is preserved and duplicate keys remain
/// representable for validation.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A text value, serialized quoted
    String(String),
    /// A numeric value
    Number(Number),
    /// A boolean value
    Bool(bool),
    /// The null value
    Null,
    /// An ordered sequence of values
    Array(Vec<JsonValue>),
    /// Ordered key/value entries
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    /// Create a string node
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an integer number node
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }

    /// Create a floating number node
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }

    /// Create an array node from its elements
    #[must_use]
    pub fn array(elements: Vec<JsonValue>) -> Self {
        Self::Array(elements)
    }

    /// Create an object node from ordered key/value entries
    #[must_use]
    pub fn object(entries: Vec<(String, JsonValue)>) -> Self {
        Self::Object(entries)
    }

    /// Get the JSON kind of this node
    #[must_use]
    pub const fn kind(&self) -> JsonKind {
        match self {
            Self::String(_) => JsonKind::String,
            Self::Number(_) => JsonKind::Number,
            Self::Bool(_) => JsonKind::Bool,
            Self::Null => JsonKind::Null,
            Self::Array(_) => JsonKind::Array,
            Self::Object(_) => JsonKind::Object,
        }
    }

    /// Serialize this tree to JSON text.
    ///
    /// Output is always a single line with no surrounding whitespace.
    /// Embedded `"` in strings become `\"`; no other escaping is
    /// performed.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        match self {
            Self::String(s) => format!("\"{}\"", s.replace('"', "\\\"")),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_string(),
            Self::Array(elements) => {
                let inner: Vec<String> = elements.iter().map(Self::to_json_string).collect();
                format!("[{}]", inner.join(","))
            }
            Self::Object(entries) => {
                let inner: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("\"{}\":{}", key, value.to_json_string()))
                    .collect();
                format!("{{{}}}", inner.join(","))
            }
        }
    }

    /// Return a new array with `transform` applied to each element.
    ///
    /// Shallow: nested containers are passed to `transform` whole, not
    /// recursed into. Returns `None` when the receiver is not an array.
    #[must_use]
    pub fn map<F>(&self, transform: F) -> Option<JsonValue>
    where
        F: Fn(&JsonValue) -> JsonValue,
    {
        match self {
            Self::Array(elements) => Some(Self::Array(elements.iter().map(transform).collect())),
            _ => None,
        }
    }

    /// Return a new array keeping the elements that satisfy `predicate`.
    ///
    /// Shallow; element order is preserved. Returns `None` when the
    /// receiver is not an array.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Option<JsonValue>
    where
        F: Fn(&JsonValue) -> bool,
    {
        match self {
            Self::Array(elements) => Some(Self::Array(
                elements.iter().filter(|e| predicate(e)).cloned().collect(),
            )),
            _ => None,
        }
    }

    /// Return a new object keeping the entries that satisfy `predicate`.
    ///
    /// Shallow; entry order is preserved. Returns `None` when the
    /// receiver is not an object.
    #[must_use]
    pub fn filter_object<F>(&self, predicate: F) -> Option<JsonValue>
    where
        F: Fn(&str, &JsonValue) -> bool,
    {
        match self {
            Self::Object(entries) => Some(Self::Object(
                entries
                    .iter()
                    .filter(|(key, value)| predicate(key, value))
                    .cloned()
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_string())
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        Self::int(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
