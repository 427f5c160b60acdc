//! # Tree Validators
//!
//! Structural validators over JSON trees, written as visitors and run
//! with [`walk`](crate::visitor::walk). The traversal recurses into
//! children on its own, so each validator only inspects the node
//! handed to it; nested containers are checked independently when the
//! walk reaches them.

use std::collections::HashSet;

use crate::json::{JsonKind, JsonValue};
use crate::visitor::{walk, JsonVisitor};

/// Flags an object invalid when two of its keys collide.
#[derive(Debug)]
pub struct UniqueKeysValidator {
    valid: bool,
}

impl Default for UniqueKeysValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl UniqueKeysValidator {
    /// Create a validator; valid until a collision is observed
    #[must_use]
    pub const fn new() -> Self {
        Self { valid: true }
    }

    /// Whether every object visited so far had unique keys
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Run the validator over a whole tree
    #[must_use]
    pub fn check(root: &JsonValue) -> bool {
        let mut validator = Self::new();
        walk(root, &mut validator);
        validator.is_valid()
    }
}

impl JsonVisitor for UniqueKeysValidator {
    fn visit_object(&mut self, entries: &[(String, JsonValue)]) {
        let mut seen = HashSet::new();
        for (key, _) in entries {
            if !seen.insert(key.as_str()) {
                self.valid = false;
                return;
            }
        }
    }
}

/// Flags an array invalid when two non-null elements differ in JSON
/// kind. Null elements are ignored for the comparison.
#[derive(Debug)]
pub struct HomogeneousArrayValidator {
    valid: bool,
}

impl HomogeneousArrayValidator {
    /// Create a validator; valid until a kind mismatch is observed
    #[must_use]
    pub const fn new() -> Self {
        Self { valid: true }
    }

    /// Whether every array visited so far was homogeneous
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Run the validator over a whole tree
    #[must_use]
    pub fn check(root: &JsonValue) -> bool {
        let mut validator = Self::new();
        walk(root, &mut validator);
        validator.is_valid()
    }
}

impl Default for HomogeneousArrayValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonVisitor for HomogeneousArrayValidator {
    fn visit_array(&mut self, elements: &[JsonValue]) {
        let mut expected: Option<JsonKind> = None;
        for element in elements {
            let kind = element.kind();
            if kind == JsonKind::Null {
                continue;
            }
            match expected {
                None => expected = Some(kind),
                Some(seen) if seen != kind => {
                    self.valid = false;
                    return;
                }
                Some(_) => {}
            }
        }
    }
}
