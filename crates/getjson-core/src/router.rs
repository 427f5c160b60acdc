//! # Route Matching
//!
//! Registration-order route matching over parsed path segments.
//!
//! Descriptors are tried in the order they were registered and the
//! first full match wins; overlapping templates are resolved by
//! declaration order, not by specificity. Matching is a linear
//! pairwise walk with no regex, so cost is O(routes × segments).
//!
//! The router is built once at startup and is read-only afterwards;
//! request tasks share it without locking.

use std::collections::HashMap;

use crate::error::Result;
use crate::route::{RouteSpec, Segment};

/// Route handler identifier, assigned sequentially at registration
pub type HandlerId = usize;

/// A successful match: the winning route plus the path variables
/// extracted from the request segments. Transient, one per request.
#[derive(Debug)]
pub struct Matched {
    /// Identifier of the winning route's handler
    pub handler_id: HandlerId,
    /// Variable name to extracted segment text
    pub path_vars: HashMap<String, String>,
}

/// Ordered route registry with first-match-wins lookup
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<RouteSpec>,
}

impl Router {
    /// Create a new empty router
    #[must_use]
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route, returning its assigned handler ID.
    ///
    /// IDs are sequential; registration order is the tie-break order
    /// used by [`Router::match_path`].
    ///
    /// # Errors
    ///
    /// Currently infallible for a well-formed [`RouteSpec`]; kept
    /// fallible so registration sites read uniformly with
    /// [`RouteSpec::new`].
    pub fn register(&mut self, spec: RouteSpec) -> Result<HandlerId> {
        let handler_id = self.routes.len();
        self.routes.push(spec);
        Ok(handler_id)
    }

    /// Get a registered route by handler ID
    #[must_use]
    pub fn route(&self, handler_id: HandlerId) -> Option<&RouteSpec> {
        self.routes.get(handler_id)
    }

    /// Number of registered routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Match parsed path segments against the registered templates.
    ///
    /// For each descriptor in registration order: reject immediately on
    /// segment-count mismatch, otherwise walk both lists pairwise — a
    /// variable segment always matches and binds, a literal segment
    /// must equal the request segment exactly. The first descriptor
    /// matching all segments wins.
    #[must_use]
    pub fn match_path(&self, segments: &[String]) -> Option<Matched> {
        for (handler_id, route) in self.routes.iter().enumerate() {
            if route.segments.len() != segments.len() {
                continue;
            }

            let mut path_vars = HashMap::new();
            let mut matched = true;

            for (template, actual) in route.segments.iter().zip(segments) {
                match template {
                    Segment::Var(name) => {
                        path_vars.insert(name.clone(), actual.clone());
                    }
                    Segment::Literal(literal) => {
                        if literal != actual {
                            matched = false;
                            break;
                        }
                    }
                }
            }

            if matched {
                return Some(Matched {
                    handler_id,
                    path_vars,
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &str) -> Vec<String> {
        crate::url::parse_url(path).segments
    }

    #[test]
    fn test_literal_match() {
        let mut router = Router::new();
        let id1 = router.register(RouteSpec::new("/api/ints").unwrap()).unwrap();
        let id2 = router.register(RouteSpec::new("/api/pair").unwrap()).unwrap();

        assert_eq!(id1, 0);
        assert_eq!(id2, 1);

        let m = router.match_path(&segs("/api/pair")).unwrap();
        assert_eq!(m.handler_id, 1);
        assert!(m.path_vars.is_empty());
    }

    #[test]
    fn test_variable_binding() {
        let mut router = Router::new();
        router
            .register(RouteSpec::new("/api/path/{pathvar}").unwrap())
            .unwrap();

        let m = router.match_path(&segs("/api/path/abc")).unwrap();
        assert_eq!(m.path_vars.get("pathvar"), Some(&"abc".to_string()));
    }

    #[test]
    fn test_segment_count_mismatch_rejected() {
        let mut router = Router::new();
        router
            .register(RouteSpec::new("/api/path/{pathvar}").unwrap())
            .unwrap();

        assert!(router.match_path(&segs("/api/path")).is_none());
        assert!(router.match_path(&segs("/api/path/a/b")).is_none());
    }

    #[test]
    fn test_literal_match_is_case_sensitive() {
        let mut router = Router::new();
        router.register(RouteSpec::new("/api/ints").unwrap()).unwrap();

        assert!(router.match_path(&segs("/API/ints")).is_none());
    }

    #[test]
    fn test_first_registered_overlapping_route_wins() {
        let mut router = Router::new();
        let literal = router.register(RouteSpec::new("/api/ints").unwrap()).unwrap();
        router
            .register(RouteSpec::new("/api/{anything}").unwrap())
            .unwrap();

        let m = router.match_path(&segs("/api/ints")).unwrap();
        assert_eq!(m.handler_id, literal);

        // reversed registration order flips the winner
        let mut router = Router::new();
        let variable_first = router
            .register(RouteSpec::new("/api/{anything}").unwrap())
            .unwrap();
        router.register(RouteSpec::new("/api/ints").unwrap()).unwrap();

        let m = router.match_path(&segs("/api/ints")).unwrap();
        assert_eq!(m.handler_id, variable_first);
        assert_eq!(m.path_vars.get("anything"), Some(&"ints".to_string()));
    }

    #[test]
    fn test_no_routes_no_match() {
        let router = Router::new();
        assert!(router.match_path(&segs("/anything")).is_none());
        assert!(router.is_empty());
    }
}
