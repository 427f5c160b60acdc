//! # URL Parsing
//!
//! Splits a raw request target into path segments and a query map.

use std::collections::HashMap;

/// Result of parsing a request target.
///
/// Created once per request; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrl {
    /// Path segments with leading/trailing slashes stripped and empty
    /// segments dropped
    pub segments: Vec<String>,
    /// Query parameters; among duplicate keys the last write wins
    pub query: HashMap<String, String>,
}

/// Parse a raw target such as `/api/args?n=3&text=PA`.
///
/// The target is split on the first `?` (a target without `?` has an
/// empty query). The path is trimmed of leading/trailing `/` and split
/// on `/`, dropping empty segments. The query is split on `&`; each
/// chunk is split on the first `=`; chunks without `=` are dropped
/// entirely.
#[must_use]
pub fn parse_url(raw: &str) -> ParsedUrl {
    let (path, query_str) = match raw.split_once('?') {
        Some((path, query)) => (path, query),
        None => (raw, ""),
    };

    let segments = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect();

    let mut query = HashMap::new();
    for chunk in query_str.split('&') {
        if let Some((key, value)) = chunk.split_once('=') {
            query.insert(key.to_string(), value.to_string());
        }
    }

    ParsedUrl { segments, query }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_query_split() {
        let parsed = parse_url("/api/args?n=3&text=PA");
        assert_eq!(parsed.segments, vec!["api", "args"]);
        assert_eq!(parsed.query.get("n"), Some(&"3".to_string()));
        assert_eq!(parsed.query.get("text"), Some(&"PA".to_string()));
    }

    #[test]
    fn test_no_query() {
        let parsed = parse_url("/api/ints");
        assert_eq!(parsed.segments, vec!["api", "ints"]);
        assert!(parsed.query.is_empty());
    }

    #[test]
    fn test_empty_segments_dropped() {
        let parsed = parse_url("/a//b");
        assert_eq!(parsed.segments, vec!["a", "b"]);

        let parsed = parse_url("//a/b///");
        assert_eq!(parsed.segments, vec!["a", "b"]);
    }

    #[test]
    fn test_root_path_has_no_segments() {
        assert!(parse_url("/").segments.is_empty());
        assert!(parse_url("").segments.is_empty());
    }

    #[test]
    fn test_malformed_query_chunk_dropped() {
        let parsed = parse_url("/x?k1=v1&bad&k2=v2");
        assert_eq!(parsed.query.len(), 2);
        assert_eq!(parsed.query.get("k1"), Some(&"v1".to_string()));
        assert_eq!(parsed.query.get("k2"), Some(&"v2".to_string()));
        assert!(!parsed.query.contains_key("bad"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let parsed = parse_url("/x?k=1&k=2");
        assert_eq!(parsed.query.get("k"), Some(&"2".to_string()));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let parsed = parse_url("/x?expr=a=b");
        assert_eq!(parsed.query.get("expr"), Some(&"a=b".to_string()));
    }

    #[test]
    fn test_only_first_question_mark_splits() {
        let parsed = parse_url("/x?a=1?b=2");
        assert_eq!(parsed.segments, vec!["x"]);
        assert_eq!(parsed.query.get("a"), Some(&"1?b=2".to_string()));
    }
}
