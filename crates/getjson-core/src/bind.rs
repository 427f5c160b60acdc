//! # Argument Binding
//!
//! Resolves each declared handler parameter from its source map (path
//! variables or query parameters) and converts the raw string to the
//! declared type.
//!
//! What happens when a source value is missing or fails to convert is
//! a configuration choice, [`BindPolicy`]: the historical behavior is
//! to bind the parameter as absent and let the handler decide;
//! `Reject` turns the same conditions into a request failure.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::route::{ParamSource, RouteSpec};
use crate::types::{convert_param, ParamValue};

/// Policy for a parameter that cannot be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindPolicy {
    /// Bind the parameter as absent; the handler observes `None`
    #[default]
    PassAbsent,
    /// Fail the request with a binding error
    Reject,
}

/// Bound arguments for one handler invocation, in declaration order.
#[derive(Debug, Default)]
pub struct Args {
    values: Vec<(String, Option<ParamValue>)>,
}

impl Args {
    /// Get a bound value by name; `None` if absent or undeclared
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(param, _)| param == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Get a string argument by name
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Get an integer argument by name
    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ParamValue::as_int)
    }

    /// Get a float argument by name
    #[must_use]
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ParamValue::as_float)
    }

    /// Get a boolean argument by name
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ParamValue::as_bool)
    }

    /// Whether a declared parameter was bound as absent
    #[must_use]
    pub fn is_absent(&self, name: &str) -> bool {
        self.values
            .iter()
            .any(|(param, value)| param == name && value.is_none())
    }

    /// Number of declared parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the route declares no parameters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Bind every declared parameter of `route` for one request.
///
/// Each parameter's raw string is looked up in the path-variable map
/// or the query map according to its binding kind, then converted to
/// its declared type.
///
/// # Errors
///
/// Under [`BindPolicy::Reject`], a missing source value or a failed
/// conversion returns [`Error::BindingFailed`]. Under
/// [`BindPolicy::PassAbsent`] this function always succeeds.
pub fn bind(
    route: &RouteSpec,
    path_vars: &HashMap<String, String>,
    query: &HashMap<String, String>,
    policy: BindPolicy,
) -> Result<Args> {
    let mut values = Vec::with_capacity(route.params.len());

    for param in &route.params {
        let raw = match param.source {
            ParamSource::Path => path_vars.get(&param.name),
            ParamSource::Query => query.get(&param.name),
        };

        let bound = match raw {
            None => match policy {
                BindPolicy::PassAbsent => None,
                BindPolicy::Reject => {
                    return Err(Error::BindingFailed {
                        name: param.name.clone(),
                        reason: "missing source value".to_string(),
                    })
                }
            },
            Some(raw) => match convert_param(raw, param.ty) {
                Ok(value) => Some(value),
                Err(err) => match policy {
                    BindPolicy::PassAbsent => None,
                    BindPolicy::Reject => {
                        return Err(Error::BindingFailed {
                            name: param.name.clone(),
                            reason: err.to_string(),
                        })
                    }
                },
            },
        };

        values.push((param.name.clone(), bound));
    }

    Ok(Args { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamType;

    fn args_route() -> RouteSpec {
        RouteSpec::new("/api/args")
            .unwrap()
            .query("n", ParamType::Int)
            .query("text", ParamType::String)
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_bind_query_parameters() {
        let route = args_route();
        let args = bind(
            &route,
            &HashMap::new(),
            &query(&[("n", "3"), ("text", "PA")]),
            BindPolicy::PassAbsent,
        )
        .unwrap();

        assert_eq!(args.get_int("n"), Some(3));
        assert_eq!(args.get_str("text"), Some("PA"));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_bind_path_variable() {
        let route = RouteSpec::new("/api/path/{pathvar}").unwrap();
        let mut path_vars = HashMap::new();
        path_vars.insert("pathvar".to_string(), "abc".to_string());

        let args = bind(&route, &path_vars, &HashMap::new(), BindPolicy::PassAbsent).unwrap();
        assert_eq!(args.get_str("pathvar"), Some("abc"));
    }

    #[test]
    fn test_missing_value_binds_absent_under_pass_absent() {
        let route = args_route();
        let args = bind(
            &route,
            &HashMap::new(),
            &query(&[("text", "PA")]),
            BindPolicy::PassAbsent,
        )
        .unwrap();

        assert!(args.is_absent("n"));
        assert_eq!(args.get_int("n"), None);
        assert_eq!(args.get_str("text"), Some("PA"));
    }

    #[test]
    fn test_conversion_failure_binds_absent_under_pass_absent() {
        let route = args_route();
        let args = bind(
            &route,
            &HashMap::new(),
            &query(&[("n", "three"), ("text", "PA")]),
            BindPolicy::PassAbsent,
        )
        .unwrap();

        assert!(args.is_absent("n"));
    }

    #[test]
    fn test_missing_value_rejected_under_reject() {
        let route = args_route();
        let err = bind(
            &route,
            &HashMap::new(),
            &query(&[("text", "PA")]),
            BindPolicy::Reject,
        )
        .unwrap_err();

        assert!(err.to_string().contains("'n'"));
    }

    #[test]
    fn test_conversion_failure_rejected_under_reject() {
        let route = args_route();
        let err = bind(
            &route,
            &HashMap::new(),
            &query(&[("n", "three"), ("text", "PA")]),
            BindPolicy::Reject,
        )
        .unwrap_err();

        assert!(err.to_string().contains("three"));
    }

    #[test]
    fn test_wrong_typed_accessor_is_none() {
        let route = args_route();
        let args = bind(
            &route,
            &HashMap::new(),
            &query(&[("n", "3"), ("text", "PA")]),
            BindPolicy::PassAbsent,
        )
        .unwrap();

        assert_eq!(args.get_str("n"), None);
        assert_eq!(args.get_int("text"), None);
    }
}
