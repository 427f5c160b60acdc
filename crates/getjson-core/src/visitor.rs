//! # Tree Traversal
//!
//! Pre-order traversal over [`JsonValue`] trees.
//!
//! Traversal is driven by a single pattern-matching function,
//! [`walk`], which fires the hook for the node's own kind first and
//! then recurses into Array/Object children in order. Visitors
//! implement only the hooks they care about; every hook has a no-op
//! default body.

use crate::json::{JsonValue, Number};

/// Consumer invoked once per node during a pre-order [`walk`].
pub trait JsonVisitor {
    /// Called for each string node
    fn visit_string(&mut self, _value: &str) {}

    /// Called for each number node
    fn visit_number(&mut self, _value: &Number) {}

    /// Called for each boolean node
    fn visit_bool(&mut self, _value: bool) {}

    /// Called for each null node
    fn visit_null(&mut self) {}

    /// Called for each array node, before its elements
    fn visit_array(&mut self, _elements: &[JsonValue]) {}

    /// Called for each object node, before its entry values
    fn visit_object(&mut self, _entries: &[(String, JsonValue)]) {}
}

/// Walk `value` in pre-order, feeding every node to `visitor`.
///
/// Container hooks fire before their children; children are visited in
/// element/entry order.
pub fn walk(value: &JsonValue, visitor: &mut dyn JsonVisitor) {
    match value {
        JsonValue::String(s) => visitor.visit_string(s),
        JsonValue::Number(n) => visitor.visit_number(n),
        JsonValue::Bool(b) => visitor.visit_bool(*b),
        JsonValue::Null => visitor.visit_null(),
        JsonValue::Array(elements) => {
            visitor.visit_array(elements);
            for element in elements {
                walk(element, visitor);
            }
        }
        JsonValue::Object(entries) => {
            visitor.visit_object(entries);
            for (_, entry) in entries {
                walk(entry, visitor);
            }
        }
    }
}
