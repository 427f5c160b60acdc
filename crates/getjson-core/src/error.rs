//! # Error Handling
//!
//! Centralized error types for the GetJson core.
//! Uses `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Result type alias for GetJson operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the GetJson runtime
#[derive(Error, Debug)]
pub enum Error {
    /// Server failed to bind to the specified address
    #[error("Failed to bind server to {address}: {source}")]
    BindError {
        /// The address we tried to bind to
        address: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// No registered route matches the requested path
    #[error("No route found for path: {path}")]
    RouteNotFound {
        /// The path that wasn't matched
        path: String,
    },

    /// Request used an HTTP method other than GET
    #[error("Method not allowed: {method}")]
    MethodNotAllowed {
        /// The rejected method
        method: String,
    },

    /// Invalid route pattern provided at registration
    #[error("Invalid route pattern: {pattern}: {reason}")]
    InvalidRoutePattern {
        /// The invalid pattern
        pattern: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A raw string could not be converted to the declared parameter type
    #[error("Cannot convert '{value}' to {expected}")]
    Conversion {
        /// The raw string value
        value: String,
        /// The declared target type
        expected: String,
    },

    /// A handler parameter could not be bound from its source
    #[error("Cannot bind parameter '{name}': {reason}")]
    BindingFailed {
        /// The parameter name
        name: String,
        /// Why binding failed (missing source value or conversion error)
        reason: String,
    },

    /// A value has no representation in the JSON value model
    #[error("Unsupported type: {type_name}")]
    UnsupportedType {
        /// Identity of the offending type
        type_name: String,
    },

    /// HTTP protocol error
    #[error("HTTP error: {0}")]
    Http(#[from] hyper::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_found_error() {
        let err = Error::RouteNotFound {
            path: "/unknown".to_string(),
        };
        assert!(err.to_string().contains("/unknown"));
    }

    #[test]
    fn test_method_not_allowed_error() {
        let err = Error::MethodNotAllowed {
            method: "POST".to_string(),
        };
        assert!(err.to_string().contains("POST"));
    }

    #[test]
    fn test_binding_failed_error() {
        let err = Error::BindingFailed {
            name: "n".to_string(),
            reason: "missing query parameter".to_string(),
        };
        assert!(err.to_string().contains("'n'"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_bind_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::BindError {
            address: "0.0.0.0:8000".to_string(),
            source: io_err,
        };
        assert!(err.to_string().contains("0.0.0.0:8000"));
    }
}
