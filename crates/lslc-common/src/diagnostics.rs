//! Warning collection and the internal emit error.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::position::SourcePosition;

/// Ordered collection of advisory warning strings.
///
/// Warnings are de-duplicated across the whole compilation: recording the
/// same text twice stores it once, in first-seen order. Warnings never abort
/// generation.
#[derive(Clone, Debug, Default)]
pub struct WarningSink {
    items: Vec<String>,
    seen: FxHashSet<String>,
}

impl WarningSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning unless an identical one is already present.
    /// Returns whether the warning was newly added.
    pub fn add(&mut self, warning: impl Into<String>) -> bool {
        let warning = warning.into();
        if self.seen.contains(&warning) {
            return false;
        }
        self.seen.insert(warning.clone());
        self.items.push(warning);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Consume the sink, yielding the warnings in recording order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Fatal internal error: the AST handed to the emitter violated the parser
/// contract. No partial output is produced when this is raised.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    /// A node reached a dispatch site whose syntactic role it can never
    /// legally occupy (e.g. an argument list in expression position).
    #[error("unexpected {kind} node in {role} position at {position}")]
    UnexpectedNode {
        kind: &'static str,
        role: &'static str,
        position: SourcePosition,
    },
}

impl EmitError {
    #[must_use]
    pub const fn unexpected(
        kind: &'static str,
        role: &'static str,
        position: SourcePosition,
    ) -> Self {
        Self::UnexpectedNode {
            kind,
            role,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_deduplicate() {
        let mut sink = WarningSink::new();
        assert!(sink.add("first"));
        assert!(sink.add("second"));
        assert!(!sink.add("first"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.iter().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn warnings_preserve_order() {
        let mut sink = WarningSink::new();
        sink.add("b");
        sink.add("a");
        sink.add("b");
        assert_eq!(sink.into_vec(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn emit_error_display_names_role_and_position() {
        let err = EmitError::unexpected("ArgumentList", "expression", SourcePosition::new(3, 7));
        assert_eq!(
            err.to_string(),
            "unexpected ArgumentList node in expression position at (3, 7)"
        );
    }
}
