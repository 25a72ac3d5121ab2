//! Expression emission.

use lslc_ast::{AssignOp, BinOp, Node, NodeKind, StepOp, Type, UnaryOp};
use lslc_common::EmitError;

use super::CsEmitter;
use crate::reserved;

impl CsEmitter {
    // =========================================================================
    // Expressions
    // =========================================================================

    /// Emit one node in expression position.
    pub(super) fn emit_expression(&mut self, node: &Node) -> Result<(), EmitError> {
        match &node.kind {
            NodeKind::Binary { op, lhs, rhs } => self.emit_binary(node, *op, lhs, rhs),
            NodeKind::Unary { op, operand } => self.emit_unary(node, *op, operand),
            NodeKind::Paren { inner } => self.emit_paren(inner),
            NodeKind::IncrDecr { op, prefix, target } => {
                self.emit_incr_decr(node, *op, *prefix, target)
            }
            NodeKind::Cast { ty, operand } => self.emit_cast(node, *ty, operand),
            NodeKind::Assignment { op, target, value } => {
                self.emit_assignment(node, *op, target, value)
            }
            NodeKind::Call { name, args } => self.emit_call(node, name, args),
            NodeKind::Ident { name } => {
                self.write_node(&reserved::escape(name), node);
                Ok(())
            }
            NodeKind::Member { owner, member } => {
                self.write_node(&format!("{}.{}", reserved::escape(owner), member), node);
                Ok(())
            }
            NodeKind::IntegerLiteral { text } => {
                self.emit_integer_literal(node, text);
                Ok(())
            }
            NodeKind::FloatLiteral { text } => {
                self.emit_float_literal(node, text);
                Ok(())
            }
            NodeKind::StringLiteral { value } => {
                self.emit_string_literal(node, value);
                Ok(())
            }
            NodeKind::VectorLiteral { x, y, z } => self.emit_vector_literal(node, x, y, z),
            NodeKind::RotationLiteral { x, y, z, s } => {
                self.emit_rotation_literal(node, x, y, z, s)
            }
            NodeKind::ListLiteral { items } => self.emit_list_literal(node, items),
            _ => Err(EmitError::unexpected(
                node.kind_name(),
                "expression",
                node.position(),
            )),
        }
    }

    fn emit_binary(
        &mut self,
        node: &Node,
        op: BinOp,
        lhs: &Node,
        rhs: &Node,
    ) -> Result<(), EmitError> {
        if op.is_logical() {
            // C#'s native && and || take bool operands only, while LSL
            // accepts numeric and string truthiness; coerce each side.
            self.write_node("((bool)(", node);
            self.emit_expression(lhs)?;
            self.write("))");
            self.write(&format!(" {} ", op.symbol()));
            self.write("((bool)(");
            self.emit_expression(rhs)?;
            self.write("))");
        } else {
            self.emit_expression(lhs)?;
            self.write_node(&format!(" {} ", op.symbol()), node);
            self.emit_expression(rhs)?;
        }
        Ok(())
    }

    fn emit_unary(&mut self, node: &Node, op: UnaryOp, operand: &Node) -> Result<(), EmitError> {
        self.write_node(op.symbol(), node);
        self.emit_expression(operand)
    }

    fn emit_paren(&mut self, inner: &Node) -> Result<(), EmitError> {
        self.write("(");
        self.emit_expression(inner)?;
        self.write(")");
        Ok(())
    }

    /// Member-access operands are reconstructed textually because the
    /// operator lands on a different side for prefix vs. postfix forms.
    fn emit_incr_decr(
        &mut self,
        _node: &Node,
        op: StepOp,
        prefix: bool,
        target: &Node,
    ) -> Result<(), EmitError> {
        let access = match &target.kind {
            NodeKind::Ident { name } => reserved::escape(name).into_owned(),
            NodeKind::Member { owner, member } => {
                format!("{}.{}", reserved::escape(owner), member)
            }
            _ => {
                return Err(EmitError::unexpected(
                    target.kind_name(),
                    "increment/decrement target",
                    target.position(),
                ));
            }
        };
        let text = if prefix {
            format!("{}{}", op.symbol(), access)
        } else {
            format!("{}{}", access, op.symbol())
        };
        self.write_node(&text, target);
        Ok(())
    }

    /// The operand is always parenthesized so the cast binds to the whole
    /// expression regardless of its structure.
    fn emit_cast(&mut self, node: &Node, ty: Type, operand: &Node) -> Result<(), EmitError> {
        self.write_node(&format!("({}) (", ty.cs_name()), node);
        self.emit_expression(operand)?;
        self.write(")");
        Ok(())
    }

    fn emit_assignment(
        &mut self,
        node: &Node,
        op: AssignOp,
        target: &Node,
        value: &Node,
    ) -> Result<(), EmitError> {
        match &target.kind {
            NodeKind::Ident { .. } | NodeKind::Member { .. } => self.emit_expression(target)?,
            _ => {
                return Err(EmitError::unexpected(
                    target.kind_name(),
                    "assignment target",
                    target.position(),
                ));
            }
        }
        self.write_node(&format!(" {} ", op.symbol()), node);
        self.emit_expression(value)
    }

    fn emit_call(&mut self, node: &Node, name: &str, args: &Node) -> Result<(), EmitError> {
        self.write_node(&format!("{}(", reserved::escape(name)), node);
        self.emit_argument_list(args)?;
        self.write(")");
        Ok(())
    }

    fn emit_argument_list(&mut self, node: &Node) -> Result<(), EmitError> {
        let NodeKind::ArgumentList { args } = &node.kind else {
            return Err(EmitError::unexpected(
                node.kind_name(),
                "argument list",
                node.position(),
            ));
        };
        self.emit_comma_separated(args)
    }

    pub(super) fn emit_comma_separated(&mut self, nodes: &[Node]) -> Result<(), EmitError> {
        let mut first = true;
        for node in nodes {
            if !first {
                self.write(", ");
            }
            first = false;
            self.emit_expression(node)?;
        }
        Ok(())
    }
}
