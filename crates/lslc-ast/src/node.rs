//! AST nodes.
//!
//! Every node carries the 1-based script (line, column) the parser stamped
//! on it. Positions are set once at parse time; the emitter only reads them.

use lslc_common::SourcePosition;
use serde::{Deserialize, Serialize};

use crate::types::{AssignOp, BinOp, StepOp, Type, UnaryOp};

/// One AST node: a script position plus a variant-specific payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub line: u32,
    pub column: u32,
    pub kind: NodeKind,
}

/// The closed set of node variants the parser can produce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Program root: global variables, global functions, and states.
    Script { decls: Vec<Node> },
    /// A global variable; the child is always a `Declaration`.
    GlobalVariable { decl: Box<Node> },
    /// A user-defined function. `return_ty` is `None` when the script
    /// declares no return type. The body is always a `Compound`.
    GlobalFunction {
        return_ty: Option<Type>,
        name: String,
        params: Vec<Node>,
        body: Box<Node>,
    },
    /// A state definition; children are `EventHandler`s.
    State { name: String, handlers: Vec<Node> },
    /// One event handler within a state. The body is always a `Compound`.
    EventHandler {
        name: String,
        params: Vec<Node>,
        body: Box<Node>,
    },
    /// A typed parameter in a function or handler signature.
    Parameter { ty: Type, name: String },
    /// `{ ... }` — an ordered list of statements introducing a block.
    Compound { stmts: Vec<Node> },
    /// An expression or declaration statement; `None` is the empty
    /// statement (a lone `;`).
    Statement { expr: Option<Box<Node>> },
    /// A typed local or global declaration with optional initializer.
    Declaration {
        ty: Type,
        name: String,
        init: Option<Box<Node>>,
    },
    If {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        cond: Box<Node>,
        body: Box<Node>,
    },
    DoWhile {
        body: Box<Node>,
        cond: Box<Node>,
    },
    /// `for` with its three optional clause lists.
    For {
        init: Vec<Node>,
        cond: Option<Box<Node>>,
        step: Vec<Node>,
        body: Box<Node>,
    },
    Return { value: Option<Box<Node>> },
    /// `@label;` — a jump target.
    Label { name: String },
    /// `jump label;`
    Jump { target: String },
    /// `state name;` — a state transition.
    StateChange { target: String },
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Paren { inner: Box<Node> },
    /// `++`/`--`, prefix or postfix, over an identifier or member access.
    IncrDecr {
        op: StepOp,
        prefix: bool,
        target: Box<Node>,
    },
    Cast {
        ty: Type,
        operand: Box<Node>,
    },
    Assignment {
        op: AssignOp,
        target: Box<Node>,
        value: Box<Node>,
    },
    /// A call to a script or builtin function; `args` is an `ArgumentList`.
    Call { name: String, args: Box<Node> },
    ArgumentList { args: Vec<Node> },
    /// Integer literal, raw source text.
    IntegerLiteral { text: String },
    /// Float literal, raw source text.
    FloatLiteral { text: String },
    /// String literal body, with source escapes intact and no quotes.
    StringLiteral { value: String },
    /// `<x, y, z>` — three numeric children.
    VectorLiteral {
        x: Box<Node>,
        y: Box<Node>,
        z: Box<Node>,
    },
    /// `<x, y, z, s>` — four numeric children.
    RotationLiteral {
        x: Box<Node>,
        y: Box<Node>,
        z: Box<Node>,
        s: Box<Node>,
    },
    /// `[a, b, ...]` — ordered children.
    ListLiteral { items: Vec<Node> },
    /// A plain identifier reference.
    Ident { name: String },
    /// A qualified (member access) reference, e.g. `pos.x`.
    Member { owner: String, member: String },
}

impl Node {
    #[must_use]
    pub const fn new(line: u32, column: u32, kind: NodeKind) -> Self {
        Self { line, column, kind }
    }

    #[must_use]
    pub const fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column)
    }

    /// Stable name of this node's variant, used in internal-error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Script { .. } => "Script",
            NodeKind::GlobalVariable { .. } => "GlobalVariable",
            NodeKind::GlobalFunction { .. } => "GlobalFunction",
            NodeKind::State { .. } => "State",
            NodeKind::EventHandler { .. } => "EventHandler",
            NodeKind::Parameter { .. } => "Parameter",
            NodeKind::Compound { .. } => "Compound",
            NodeKind::Statement { .. } => "Statement",
            NodeKind::Declaration { .. } => "Declaration",
            NodeKind::If { .. } => "If",
            NodeKind::While { .. } => "While",
            NodeKind::DoWhile { .. } => "DoWhile",
            NodeKind::For { .. } => "For",
            NodeKind::Return { .. } => "Return",
            NodeKind::Label { .. } => "Label",
            NodeKind::Jump { .. } => "Jump",
            NodeKind::StateChange { .. } => "StateChange",
            NodeKind::Binary { .. } => "Binary",
            NodeKind::Unary { .. } => "Unary",
            NodeKind::Paren { .. } => "Paren",
            NodeKind::IncrDecr { .. } => "IncrDecr",
            NodeKind::Cast { .. } => "Cast",
            NodeKind::Assignment { .. } => "Assignment",
            NodeKind::Call { .. } => "Call",
            NodeKind::ArgumentList { .. } => "ArgumentList",
            NodeKind::IntegerLiteral { .. } => "IntegerLiteral",
            NodeKind::FloatLiteral { .. } => "FloatLiteral",
            NodeKind::StringLiteral { .. } => "StringLiteral",
            NodeKind::VectorLiteral { .. } => "VectorLiteral",
            NodeKind::RotationLiteral { .. } => "RotationLiteral",
            NodeKind::ListLiteral { .. } => "ListLiteral",
            NodeKind::Ident { .. } => "Ident",
            NodeKind::Member { .. } => "Member",
        }
    }

    /// All direct children, in source order. Lets analyses walk the tree
    /// uniformly without matching every variant themselves.
    #[must_use]
    pub fn kids(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Script { decls } => decls.iter().collect(),
            NodeKind::GlobalVariable { decl } => vec![&**decl],
            NodeKind::GlobalFunction { params, body, .. }
            | NodeKind::EventHandler { params, body, .. } => {
                params.iter().chain(std::iter::once(&**body)).collect()
            }
            NodeKind::State { handlers, .. } => handlers.iter().collect(),
            NodeKind::Parameter { .. }
            | NodeKind::Label { .. }
            | NodeKind::Jump { .. }
            | NodeKind::StateChange { .. }
            | NodeKind::IntegerLiteral { .. }
            | NodeKind::FloatLiteral { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::Ident { .. }
            | NodeKind::Member { .. } => Vec::new(),
            NodeKind::Compound { stmts } => stmts.iter().collect(),
            NodeKind::Statement { expr } => expr.iter().map(|e| &**e).collect(),
            NodeKind::Declaration { init, .. } => init.iter().map(|e| &**e).collect(),
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let mut kids = vec![&**cond, &**then_branch];
                if let Some(els) = else_branch {
                    kids.push(&**els);
                }
                kids
            }
            NodeKind::While { cond, body } => vec![&**cond, &**body],
            NodeKind::DoWhile { body, cond } => vec![&**body, &**cond],
            NodeKind::For {
                init,
                cond,
                step,
                body,
            } => init
                .iter()
                .chain(cond.iter().map(|c| &**c))
                .chain(step.iter())
                .chain(std::iter::once(&**body))
                .collect(),
            NodeKind::Return { value } => value.iter().map(|v| &**v).collect(),
            NodeKind::Binary { lhs, rhs, .. } => vec![&**lhs, &**rhs],
            NodeKind::Unary { operand, .. } => vec![&**operand],
            NodeKind::Paren { inner } => vec![&**inner],
            NodeKind::IncrDecr { target, .. } => vec![&**target],
            NodeKind::Cast { operand, .. } => vec![&**operand],
            NodeKind::Assignment { target, value, .. } => vec![&**target, &**value],
            NodeKind::Call { args, .. } => vec![&**args],
            NodeKind::ArgumentList { args } => args.iter().collect(),
            NodeKind::VectorLiteral { x, y, z } => vec![&**x, &**y, &**z],
            NodeKind::RotationLiteral { x, y, z, s } => vec![&**x, &**y, &**z, &**s],
            NodeKind::ListLiteral { items } => items.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(line: u32, column: u32, name: &str) -> Node {
        Node::new(
            line,
            column,
            NodeKind::Ident {
                name: name.to_string(),
            },
        )
    }

    #[test]
    fn kids_are_ordered() {
        let node = Node::new(
            1,
            5,
            NodeKind::Binary {
                op: BinOp::Add,
                lhs: Box::new(ident(1, 1, "a")),
                rhs: Box::new(ident(1, 9, "b")),
            },
        );
        let kids = node.kids();
        assert_eq!(kids.len(), 2);
        assert_eq!(kids[0].column, 1);
        assert_eq!(kids[1].column, 9);
    }

    #[test]
    fn for_kids_cover_all_clauses_and_body() {
        let node = Node::new(
            3,
            1,
            NodeKind::For {
                init: vec![ident(3, 6, "i")],
                cond: Some(Box::new(ident(3, 9, "c"))),
                step: vec![ident(3, 12, "s")],
                body: Box::new(Node::new(3, 15, NodeKind::Compound { stmts: vec![] })),
            },
        );
        let names: Vec<&'static str> = node.kids().iter().map(|k| k.kind_name()).collect();
        assert_eq!(names, vec!["Ident", "Ident", "Ident", "Compound"]);
    }

    #[test]
    fn leaves_have_no_kids() {
        assert!(ident(1, 1, "x").kids().is_empty());
        let label = Node::new(
            2,
            1,
            NodeKind::Label {
                name: "top".to_string(),
            },
        );
        assert!(label.kids().is_empty());
    }
}
