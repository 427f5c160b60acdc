//! # Parameter Types
//!
//! Target primitive types for bound handler parameters, and the
//! conversion from raw URL strings to typed values.

use std::fmt;

use crate::error::{Error, Result};

/// Supported handler parameter types
///
/// Declared during route registration. Default is `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamType {
    /// String type (default) - no conversion
    #[default]
    String,
    /// Integer type - parses to i64
    Int,
    /// Float type - parses to f64
    Float,
    /// Boolean type - parses the literal tokens "true"/"false" only
    Bool,
}

impl ParamType {
    /// Parse a type specifier from a route pattern (e.g. "int" from `{n:int}`)
    #[must_use]
    pub fn from_specifier(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "int" | "integer" | "i64" => Self::Int,
            "float" | "f64" | "number" => Self::Float,
            "bool" | "boolean" => Self::Bool,
            _ => Self::String,
        }
    }

    /// Get the type name for error messages
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Converted parameter value
///
/// Holds the actual typed value handed to handlers after conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value (no conversion performed)
    String(String),
    /// Integer value (i64)
    Int(i64),
    /// Float value (f64)
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl ParamValue {
    /// Get as &str if String variant
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64 if Int variant
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if Float variant
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as bool if Bool variant
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Convert a raw URL string to a typed value based on `ParamType`.
///
/// String passes through; integers and floats use the strict numeric
/// grammar of the standard parsers; booleans accept only the literal
/// tokens `true` and `false`.
///
/// # Errors
///
/// Returns [`Error::Conversion`] if the raw string does not parse as
/// the declared type.
pub fn convert_param(raw: &str, param_type: ParamType) -> Result<ParamValue> {
    match param_type {
        ParamType::String => Ok(ParamValue::String(raw.to_string())),
        ParamType::Int => raw
            .parse::<i64>()
            .map(ParamValue::Int)
            .map_err(|_| Error::Conversion {
                value: raw.to_string(),
                expected: ParamType::Int.to_string(),
            }),
        ParamType::Float => raw
            .parse::<f64>()
            .map(ParamValue::Float)
            .map_err(|_| Error::Conversion {
                value: raw.to_string(),
                expected: ParamType::Float.to_string(),
            }),
        ParamType::Bool => match raw {
            "true" => Ok(ParamValue::Bool(true)),
            "false" => Ok(ParamValue::Bool(false)),
            _ => Err(Error::Conversion {
                value: raw.to_string(),
                expected: ParamType::Bool.to_string(),
            }),
        },
    }
}

/// Parse a path segment pattern to extract a variable name and type.
///
/// Examples:
/// - `{id}` -> ("id", `ParamType::String`)
/// - `{n:int}` -> ("n", `ParamType::Int`)
///
/// Returns `None` for literal segments.
#[must_use]
pub fn parse_param_pattern(segment: &str) -> Option<(String, ParamType)> {
    if segment.starts_with('{') && segment.ends_with('}') && segment.len() >= 2 {
        let inner = &segment[1..segment.len() - 1];

        if let Some((name, type_spec)) = inner.split_once(':') {
            Some((name.to_string(), ParamType::from_specifier(type_spec)))
        } else {
            Some((inner.to_string(), ParamType::String))
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_from_specifier() {
        assert_eq!(ParamType::from_specifier("int"), ParamType::Int);
        assert_eq!(ParamType::from_specifier("INT"), ParamType::Int);
        assert_eq!(ParamType::from_specifier("float"), ParamType::Float);
        assert_eq!(ParamType::from_specifier("bool"), ParamType::Bool);
        assert_eq!(ParamType::from_specifier("unknown"), ParamType::String);
    }

    #[test]
    fn test_convert_string_passthrough() {
        let result = convert_param("hello", ParamType::String).unwrap();
        assert_eq!(result, ParamValue::String("hello".to_string()));
    }

    #[test]
    fn test_convert_int() {
        assert_eq!(
            convert_param("123", ParamType::Int).unwrap(),
            ParamValue::Int(123)
        );
        assert_eq!(
            convert_param("-456", ParamType::Int).unwrap(),
            ParamValue::Int(-456)
        );
    }

    #[test]
    fn test_convert_int_invalid() {
        assert!(convert_param("abc", ParamType::Int).is_err());
        assert!(convert_param("1.5", ParamType::Int).is_err());
        assert!(convert_param("", ParamType::Int).is_err());
    }

    #[test]
    fn test_convert_float() {
        assert_eq!(
            convert_param("3.14", ParamType::Float).unwrap(),
            ParamValue::Float(3.14)
        );
    }

    #[test]
    fn test_convert_bool_literal_tokens_only() {
        assert_eq!(
            convert_param("true", ParamType::Bool).unwrap(),
            ParamValue::Bool(true)
        );
        assert_eq!(
            convert_param("false", ParamType::Bool).unwrap(),
            ParamValue::Bool(false)
        );
        assert!(convert_param("1", ParamType::Bool).is_err());
        assert!(convert_param("yes", ParamType::Bool).is_err());
        assert!(convert_param("True", ParamType::Bool).is_err());
    }

    #[test]
    fn test_parse_param_pattern() {
        assert_eq!(
            parse_param_pattern("{id}"),
            Some(("id".to_string(), ParamType::String))
        );
        assert_eq!(
            parse_param_pattern("{n:int}"),
            Some(("n".to_string(), ParamType::Int))
        );
        assert_eq!(parse_param_pattern("static"), None);
        assert_eq!(parse_param_pattern("{open"), None);
    }

    #[test]
    fn test_param_value_accessors() {
        assert_eq!(ParamValue::Int(42).as_int(), Some(42));
        assert_eq!(ParamValue::Int(42).as_str(), None);
        assert_eq!(ParamValue::Float(2.5).as_float(), Some(2.5));
        assert_eq!(ParamValue::Bool(true).as_bool(), Some(true));
        assert_eq!(
            ParamValue::String("x".to_string()).as_str(),
            Some("x")
        );
    }
}
