//! # Route Metadata
//!
//! Route templates and per-parameter binding specs, built explicitly
//! at startup by [`RouteSpec`]'s builder methods. Every route's shape
//! is a first-class value: the matcher and the argument binder both
//! read it, nothing is discovered at request time.

use crate::error::{Error, Result};
use crate::types::{parse_param_pattern, ParamType};

/// One segment of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly (case-sensitive)
    Literal(String),
    /// Matches any request segment, binding it under this name
    Var(String),
}

/// Where a handler parameter's raw string comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    /// Bound from a path variable of the matched template
    Path,
    /// Bound from a query parameter
    Query,
}

/// Binding descriptor for a single handler parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Parameter name; for path parameters, the template variable name
    pub name: String,
    /// Binding kind
    pub source: ParamSource,
    /// Target primitive type
    pub ty: ParamType,
}

/// A registered route's template and parameter descriptors.
///
/// Path variables are declared inside the template with the bracket
/// syntax `{name}` or `{name:type}`; the type annotation is stripped
/// for matching. Query parameters are declared with [`RouteSpec::query`].
#[derive(Debug, Clone)]
pub struct RouteSpec {
    /// Original path pattern as registered
    pub pattern: String,
    /// Parsed template segments
    pub segments: Vec<Segment>,
    /// Parameter descriptors, path variables first in template order
    pub params: Vec<ParamSpec>,
}

impl RouteSpec {
    /// Parse a path template into a route spec.
    ///
    /// Each `{name}` / `{name:type}` segment registers a path-sourced
    /// parameter in template order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoutePattern`] for empty or duplicate
    /// variable names.
    pub fn new(pattern: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut params: Vec<ParamSpec> = Vec::new();

        for segment in pattern.trim_matches('/').split('/') {
            if segment.is_empty() {
                continue;
            }

            if let Some((name, ty)) = parse_param_pattern(segment) {
                if name.is_empty() {
                    return Err(Error::InvalidRoutePattern {
                        pattern: pattern.to_string(),
                        reason: "empty variable name".to_string(),
                    });
                }
                if params.iter().any(|p| p.name == name) {
                    return Err(Error::InvalidRoutePattern {
                        pattern: pattern.to_string(),
                        reason: format!("duplicate variable name '{name}'"),
                    });
                }
                params.push(ParamSpec {
                    name: name.clone(),
                    source: ParamSource::Path,
                    ty,
                });
                segments.push(Segment::Var(name));
            } else {
                segments.push(Segment::Literal(segment.to_string()));
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            params,
        })
    }

    /// Parse a template composed of a shared prefix and a
    /// handler-specific suffix, joined with a single `/`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RouteSpec::new`].
    pub fn under(prefix: &str, suffix: &str) -> Result<Self> {
        let joined = format!("{}/{}", prefix.trim_matches('/'), suffix.trim_matches('/'));
        Self::new(&joined)
    }

    /// Declare a query-sourced parameter with a target type.
    ///
    /// Declaration order is the binding order seen by the handler.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            source: ParamSource::Query,
            ty,
        });
        self
    }

    /// Get the declared type for a parameter by name
    ///
    /// Returns `ParamType::String` when the parameter is unknown.
    #[must_use]
    pub fn param_type(&self, name: &str) -> ParamType {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map_or_else(ParamType::default, |p| p.ty)
    }
}
