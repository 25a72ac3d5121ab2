//! Control-flow statement emission.

use lslc_ast::{Node, NodeKind};
use lslc_common::EmitError;

use super::CsEmitter;
use crate::reserved;

impl CsEmitter {
    // =========================================================================
    // Control flow
    // =========================================================================

    pub(super) fn emit_if(
        &mut self,
        node: &Node,
        cond: &Node,
        then_branch: &Node,
        else_branch: Option<&Node>,
    ) -> Result<(), EmitError> {
        self.write_indent();
        self.write_node("if (", node);
        self.emit_expression(cond)?;
        self.write(")");
        self.write_line();
        self.emit_statement_node(then_branch)?;
        if let Some(els) = else_branch {
            self.write_indent();
            self.write("else");
            self.write_line();
            self.emit_statement_node(els)?;
        }
        Ok(())
    }

    pub(super) fn emit_while(
        &mut self,
        node: &Node,
        cond: &Node,
        body: &Node,
    ) -> Result<(), EmitError> {
        self.write_indent();
        self.write_node("while (", node);
        self.emit_expression(cond)?;
        self.write(")");
        self.write_line();
        self.emit_statement_node(body)
    }

    pub(super) fn emit_do_while(
        &mut self,
        node: &Node,
        body: &Node,
        cond: &Node,
    ) -> Result<(), EmitError> {
        self.write_indent();
        self.write_node("do", node);
        self.write_line();
        self.emit_statement_node(body)?;
        self.write_indent();
        self.write("while (");
        self.emit_expression(cond)?;
        self.write(");");
        self.write_line();
        Ok(())
    }

    pub(super) fn emit_for(
        &mut self,
        node: &Node,
        init: &[Node],
        cond: Option<&Node>,
        step: &[Node],
        body: &Node,
    ) -> Result<(), EmitError> {
        self.write_indent();
        self.write_node("for (", node);
        self.emit_for_clause(init)?;
        self.write("; ");
        if let Some(cond) = cond {
            self.emit_expression(cond)?;
        }
        self.write("; ");
        self.emit_for_clause(step)?;
        self.write(")");
        self.write_line();
        self.emit_statement_node(body)
    }

    /// Emit one `for` clause list, comma-joined.
    ///
    /// A clause element that is only a bare identifier is dropped — it is
    /// not a legal statement in C#. Wrapping parentheses are stripped
    /// because the C# grammar does not accept a parenthesized statement in
    /// this position.
    fn emit_for_clause(&mut self, elements: &[Node]) -> Result<(), EmitError> {
        let mut first = true;
        for element in elements {
            let mut element = element;
            while let NodeKind::Paren { inner } = &element.kind {
                element = &**inner;
            }
            if matches!(element.kind, NodeKind::Ident { .. }) {
                continue;
            }
            if !first {
                self.write(", ");
            }
            first = false;
            self.emit_expression(element)?;
        }
        Ok(())
    }

    pub(super) fn emit_return(
        &mut self,
        node: &Node,
        value: Option<&Node>,
    ) -> Result<(), EmitError> {
        self.write_indent();
        match value {
            Some(value) => {
                self.write_node("return ", node);
                self.emit_expression(value)?;
            }
            None => self.write_node("return", node),
        }
        self.write(";");
        self.write_line();
        Ok(())
    }

    /// A label must not be immediately followed by a closing brace in C#,
    /// so every label carries a trailing no-op call.
    pub(super) fn emit_label(&mut self, node: &Node, name: &str) -> Result<(), EmitError> {
        self.write_indent();
        self.write_node(&format!("{}: NoOp()", reserved::escape(name)), node);
        self.write(";");
        self.write_line();
        Ok(())
    }

    pub(super) fn emit_jump(&mut self, node: &Node, target: &str) -> Result<(), EmitError> {
        self.write_indent();
        self.write_node(&format!("goto {}", reserved::escape(target)), node);
        self.write(";");
        self.write_line();
        Ok(())
    }

    pub(super) fn emit_state_change(&mut self, node: &Node, target: &str) -> Result<(), EmitError> {
        self.write_indent();
        self.write_node(&format!("state(\"{target}\")"), node);
        self.write(";");
        self.write_line();
        Ok(())
    }
}
