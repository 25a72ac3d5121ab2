//! Literal emission.
//!
//! Every literal is wrapped in its `LSL_Types` constructor rather than
//! emitted as a bare C# literal, so script arithmetic and stringification
//! semantics survive the translation.

use lslc_ast::Node;
use lslc_common::EmitError;

use super::CsEmitter;

impl CsEmitter {
    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn emit_integer_literal(&mut self, node: &Node, text: &str) {
        self.write_node(&format!("new LSL_Types.LSLInteger({text})"), node);
    }

    /// A float whose source text ends at the decimal point (`10.`) is legal
    /// LSL but not legal C#; it is normalized with a trailing zero and the
    /// normalization is recorded as a warning.
    pub(super) fn emit_float_literal(&mut self, node: &Node, text: &str) {
        let mut normalized = text.to_string();
        if normalized.ends_with('.') {
            normalized.push('0');
            self.warn(format!(
                "Float constant \"{}\" at line {}, column {} has no digits after \
                 the decimal point; emitted as \"{}\".",
                text, node.line, node.column, normalized
            ));
        }
        self.write_node(&format!("new LSL_Types.LSLFloat({normalized})"), node);
    }

    /// `value` carries the body of the literal with source escapes intact.
    pub(super) fn emit_string_literal(&mut self, node: &Node, value: &str) {
        self.write_node(&format!("new LSL_Types.LSLString(\"{value}\")"), node);
    }

    pub(super) fn emit_vector_literal(
        &mut self,
        node: &Node,
        x: &Node,
        y: &Node,
        z: &Node,
    ) -> Result<(), EmitError> {
        self.write_node("new LSL_Types.Vector3(", node);
        self.emit_expression(x)?;
        self.write(", ");
        self.emit_expression(y)?;
        self.write(", ");
        self.emit_expression(z)?;
        self.write(")");
        Ok(())
    }

    pub(super) fn emit_rotation_literal(
        &mut self,
        node: &Node,
        x: &Node,
        y: &Node,
        z: &Node,
        s: &Node,
    ) -> Result<(), EmitError> {
        self.write_node("new LSL_Types.Quaternion(", node);
        self.emit_expression(x)?;
        self.write(", ");
        self.emit_expression(y)?;
        self.write(", ");
        self.emit_expression(z)?;
        self.write(", ");
        self.emit_expression(s)?;
        self.write(")");
        Ok(())
    }

    pub(super) fn emit_list_literal(
        &mut self,
        node: &Node,
        items: &[Node],
    ) -> Result<(), EmitError> {
        self.write_node("new LSL_Types.list(", node);
        self.emit_comma_separated(items)?;
        self.write(")");
        Ok(())
    }
}
