//! Detection of repeated assignment targets within one statement.
//!
//! LSL evaluates sub-expressions right-to-left; the generated C# evaluates
//! left-to-right. A statement that assigns the same variable more than once,
//! such as `x = (x = 3) + 4;`, can therefore change meaning in translation.
//! The audit is advisory only: it records a warning and never alters the
//! emitted code.

use lslc_ast::{Node, NodeKind};
use lslc_common::WarningSink;

/// Walk one statement's subtree and warn about any identifier that is an
/// assignment target more than once within it. Warnings are de-duplicated
/// across the whole compilation by the sink.
pub fn audit_statement(stmt: &Node, warnings: &mut WarningSink) {
    let mut targets: Vec<String> = Vec::new();
    collect(stmt, &mut targets, warnings);
}

fn collect(node: &Node, targets: &mut Vec<String>, warnings: &mut WarningSink) {
    if let Some(name) = assignment_target(node) {
        if targets.iter().any(|t| *t == name) {
            let added = warnings.add(format!(
                "Multiple assignments to \"{}\" at line {}, column {}; \
                 results may differ between LSL and C#.",
                name, node.line, node.column
            ));
            if added {
                tracing::trace!(target = %name, line = node.line, "multiple assignment detected");
            }
        } else {
            targets.push(name);
        }
    }
    for kid in node.kids() {
        collect(kid, targets, warnings);
    }
}

/// The name an assignment-like node writes to, if this is one.
/// A declaration with an initializer counts as an assignment to its name.
fn assignment_target(node: &Node) -> Option<String> {
    match &node.kind {
        NodeKind::Assignment { target, .. } => match &target.kind {
            NodeKind::Ident { name } => Some(name.clone()),
            NodeKind::Member { owner, member } => Some(format!("{owner}.{member}")),
            _ => None,
        },
        NodeKind::Declaration {
            name,
            init: Some(_),
            ..
        } => Some(name.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lslc_ast::{AssignOp, Type};

    fn ident(name: &str) -> Node {
        Node::new(
            1,
            1,
            NodeKind::Ident {
                name: name.to_string(),
            },
        )
    }

    fn int_lit(text: &str) -> Node {
        Node::new(
            1,
            1,
            NodeKind::IntegerLiteral {
                text: text.to_string(),
            },
        )
    }

    fn assign(target: Node, value: Node) -> Node {
        Node::new(
            1,
            1,
            NodeKind::Assignment {
                op: AssignOp::Assign,
                target: Box::new(target),
                value: Box::new(value),
            },
        )
    }

    fn statement(expr: Node) -> Node {
        Node::new(
            1,
            1,
            NodeKind::Statement {
                expr: Some(Box::new(expr)),
            },
        )
    }

    #[test]
    fn nested_assignment_to_same_name_warns_once() {
        // x = (x = 3) + 4;
        let inner = Node::new(
            1,
            5,
            NodeKind::Paren {
                inner: Box::new(assign(ident("x"), int_lit("3"))),
            },
        );
        let sum = Node::new(
            1,
            5,
            NodeKind::Binary {
                op: lslc_ast::BinOp::Add,
                lhs: Box::new(inner),
                rhs: Box::new(int_lit("4")),
            },
        );
        let stmt = statement(assign(ident("x"), sum));

        let mut sink = WarningSink::new();
        audit_statement(&stmt, &mut sink);
        assert_eq!(sink.len(), 1);
        assert!(sink.iter().next().unwrap().contains("\"x\""));
    }

    #[test]
    fn distinct_targets_do_not_warn() {
        // x = (y = 3) + 4; assigns two different names
        let inner = assign(ident("y"), int_lit("3"));
        let stmt = statement(assign(ident("x"), inner));

        let mut sink = WarningSink::new();
        audit_statement(&stmt, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn declaration_initializer_counts_as_assignment() {
        // integer i = (i = 2);
        let decl = Node::new(
            1,
            1,
            NodeKind::Declaration {
                ty: Type::Integer,
                name: "i".to_string(),
                init: Some(Box::new(assign(ident("i"), int_lit("2")))),
            },
        );
        let stmt = statement(decl);

        let mut sink = WarningSink::new();
        audit_statement(&stmt, &mut sink);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn member_targets_are_tracked_by_full_path() {
        // pos.x = (pos.x = 1) + 1;
        let member = || Node::new(
            2,
            1,
            NodeKind::Member {
                owner: "pos".to_string(),
                member: "x".to_string(),
            },
        );
        let inner = assign(member(), int_lit("1"));
        let stmt = statement(assign(member(), inner));

        let mut sink = WarningSink::new();
        audit_statement(&stmt, &mut sink);
        assert_eq!(sink.len(), 1);
        assert!(sink.iter().next().unwrap().contains("pos.x"));
    }

    #[test]
    fn identical_warning_is_deduplicated_across_statements() {
        let make_stmt = || {
            let inner = assign(ident("x"), int_lit("3"));
            statement(assign(ident("x"), inner))
        };
        let mut sink = WarningSink::new();
        audit_statement(&make_stmt(), &mut sink);
        audit_statement(&make_stmt(), &mut sink);
        assert_eq!(sink.len(), 1);
    }
}
