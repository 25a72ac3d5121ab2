//! Output accumulation with line/column tracking and position-map recording.
//!
//! The writer owns the generated-text buffer, the (line, column) of the next
//! character to be written, the indent depth, and the position map. The
//! emitter never touches the buffer directly; every byte of output flows
//! through `write`/`write_node`/`write_line`.

use lslc_common::{PositionMap, SourcePosition};

const INDENT: &str = "    ";

/// Growable output buffer for one generation run.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    line: u32,
    column: u32,
    indent_depth: u32,
    position_map: PositionMap,
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::new(),
            line: 1,
            column: 1,
            indent_depth: 0,
            position_map: PositionMap::new(),
        }
    }

    /// The generated coordinate the next character will land on.
    #[must_use]
    pub const fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column)
    }

    #[must_use]
    pub const fn indent_depth(&self) -> u32 {
        self.indent_depth
    }

    /// Write text with no originating script node (generator punctuation).
    /// No position-map entry is recorded for it.
    pub fn write(&mut self, text: &str) {
        self.push_text(text);
    }

    /// Record that the token about to be written originated at `source`,
    /// then write it.
    pub fn write_node(&mut self, text: &str, source: SourcePosition) {
        self.position_map.record(self.position(), source);
        self.push_text(text);
    }

    /// Terminate the current line.
    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.line += 1;
        self.column = 1;
    }

    /// Write the indentation prefix for the current depth.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_depth {
            self.push_text(INDENT);
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent_depth += 1;
    }

    pub fn decrease_indent(&mut self) {
        debug_assert!(self.indent_depth > 0, "indent depth underflow");
        self.indent_depth -= 1;
    }

    /// Consume the writer, yielding the text and the position map.
    #[must_use]
    pub fn finish(self) -> (String, PositionMap) {
        (self.output, self.position_map)
    }

    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.output.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_line_and_column() {
        let mut w = SourceWriter::new();
        assert_eq!(w.position(), SourcePosition::new(1, 1));
        w.write("abc");
        assert_eq!(w.position(), SourcePosition::new(1, 4));
        w.write_line();
        assert_eq!(w.position(), SourcePosition::new(2, 1));
    }

    #[test]
    fn write_node_records_start_coordinate() {
        let mut w = SourceWriter::new();
        w.write("xy");
        w.write_node("token", SourcePosition::new(7, 3));
        let (text, map) = w.finish();
        assert_eq!(text, "xytoken");
        assert_eq!(
            map.lookup(SourcePosition::new(1, 3)),
            Some(SourcePosition::new(7, 3))
        );
    }

    #[test]
    fn indent_prefix_follows_depth() {
        let mut w = SourceWriter::new();
        w.increase_indent();
        w.increase_indent();
        w.write_indent();
        w.write("x");
        w.decrease_indent();
        w.decrease_indent();
        let (text, _) = w.finish();
        assert_eq!(text, "        x");
    }

    #[test]
    fn plain_write_records_nothing() {
        let mut w = SourceWriter::new();
        w.write("{");
        let (_, map) = w.finish();
        assert!(map.is_empty());
    }
}
