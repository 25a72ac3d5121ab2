//! Source locations and the generated-to-source position map.
//!
//! Both the script source and the generated C# use 1-based line/column
//! coordinates. The parser stamps every AST node with its script position;
//! the emitter records, for every token it writes that originated from a
//! node, the generated coordinate at which that token begins. The resulting
//! `PositionMap` is what a runtime fault-translator uses to turn a C#
//! exception location back into a script line/column.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

/// A 1-based (line, column) coordinate in a source or generated text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// Insertion-ordered table mapping generated (line, column) coordinates to
/// the script (line, column) they originated from.
///
/// Entries are only ever appended, in emission order, so two runs over the
/// same AST produce equal maps with identical iteration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionMap {
    entries: IndexMap<SourcePosition, SourcePosition, FxBuildHasher>,
}

impl PositionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the token starting at `generated` originated at `source`.
    /// The first recording for a generated coordinate wins.
    pub fn record(&mut self, generated: SourcePosition, source: SourcePosition) {
        self.entries.entry(generated).or_insert(source);
    }

    /// Look up the script position for a generated coordinate.
    #[must_use]
    pub fn lookup(&self, generated: SourcePosition) -> Option<SourcePosition> {
        self.entries.get(&generated).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SourcePosition, &SourcePosition)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the map as JSON, one entry per mapping, in insertion order.
    /// Consumed by external tooling that resolves runtime fault locations.
    #[must_use]
    pub fn to_json(&self) -> String {
        let entries: Vec<serde_json::Value> = self
            .entries
            .iter()
            .map(|(generated, source)| {
                serde_json::json!({
                    "generated": { "line": generated.line, "column": generated.column },
                    "source": { "line": source.line, "column": source.column },
                })
            })
            .collect();
        serde_json::json!({ "version": 1, "mappings": entries }).to_string()
    }
}
