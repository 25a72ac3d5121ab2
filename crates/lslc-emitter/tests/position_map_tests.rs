//! Position-map integrity tests.

use lslc_ast::{AssignOp, BinOp, Node, NodeKind, Type};
use lslc_common::SourcePosition;
use lslc_emitter::generate;

fn node(line: u32, column: u32, kind: NodeKind) -> Node {
    Node::new(line, column, kind)
}

fn ident(line: u32, column: u32, name: &str) -> Node {
    node(
        line,
        column,
        NodeKind::Ident {
            name: name.to_string(),
        },
    )
}

fn int_lit(line: u32, column: u32, text: &str) -> Node {
    node(
        line,
        column,
        NodeKind::IntegerLiteral {
            text: text.to_string(),
        },
    )
}

fn stmt(line: u32, column: u32, expr: Node) -> Node {
    node(
        line,
        column,
        NodeKind::Statement {
            expr: Some(Box::new(expr)),
        },
    )
}

fn state_entry_script(stmts: Vec<Node>) -> Node {
    node(
        1,
        1,
        NodeKind::Script {
            decls: vec![node(
                1,
                1,
                NodeKind::State {
                    name: "default".to_string(),
                    handlers: vec![node(
                        2,
                        5,
                        NodeKind::EventHandler {
                            name: "state_entry".to_string(),
                            params: vec![],
                            body: Box::new(node(3, 5, NodeKind::Compound { stmts })),
                        },
                    )],
                },
            )],
        },
    )
}

#[test]
fn every_leaf_token_round_trips() {
    // x = y + 3;
    let leaves = [
        SourcePosition::new(5, 9),  // x
        SourcePosition::new(5, 13), // y
        SourcePosition::new(5, 17), // 3
    ];
    let ast = state_entry_script(vec![stmt(
        5,
        9,
        node(
            5,
            11,
            NodeKind::Assignment {
                op: AssignOp::Assign,
                target: Box::new(ident(5, 9, "x")),
                value: Box::new(node(
                    5,
                    15,
                    NodeKind::Binary {
                        op: BinOp::Add,
                        lhs: Box::new(ident(5, 13, "y")),
                        rhs: Box::new(int_lit(5, 17, "3")),
                    },
                )),
            },
        ),
    )]);

    let emitted = generate(&ast).unwrap();
    for leaf in leaves {
        assert!(
            emitted.position_map.iter().any(|(_, source)| *source == leaf),
            "no position-map entry originates at {leaf}"
        );
    }
}

#[test]
fn generator_punctuation_has_no_mapping() {
    let ast = state_entry_script(vec![]);
    let emitted = generate(&ast).unwrap();

    // Line 2 is the namespace's opening brace, pure generator punctuation.
    assert_eq!(emitted.text.lines().nth(1), Some("{"));
    assert_eq!(emitted.position_map.lookup(SourcePosition::new(2, 1)), None);
}

#[test]
fn mapped_generated_coordinates_point_at_token_starts() {
    let ast = state_entry_script(vec![stmt(
        5,
        9,
        node(
            5,
            9,
            NodeKind::Declaration {
                ty: Type::Integer,
                name: "counter".to_string(),
                init: None,
            },
        ),
    )]);

    let emitted = generate(&ast).unwrap();
    let (line_idx, line) = emitted
        .text
        .lines()
        .enumerate()
        .find(|(_, l)| l.contains("LSL_Types.LSLInteger counter"))
        .unwrap();
    let generated = SourcePosition::new(
        line_idx as u32 + 1,
        line.find("LSL_Types").unwrap() as u32 + 1,
    );
    assert_eq!(
        emitted.position_map.lookup(generated),
        Some(SourcePosition::new(5, 9))
    );
}

#[test]
fn handler_signature_maps_to_handler_node() {
    let ast = state_entry_script(vec![]);
    let emitted = generate(&ast).unwrap();

    let (line_idx, line) = emitted
        .text
        .lines()
        .enumerate()
        .find(|(_, l)| l.contains("public void default_event_state_entry"))
        .unwrap();
    let generated = SourcePosition::new(
        line_idx as u32 + 1,
        line.find("public").unwrap() as u32 + 1,
    );
    assert_eq!(
        emitted.position_map.lookup(generated),
        Some(SourcePosition::new(2, 5))
    );
}

#[test]
fn json_export_carries_all_entries() {
    let ast = state_entry_script(vec![stmt(
        5,
        9,
        node(
            5,
            9,
            NodeKind::Declaration {
                ty: Type::Integer,
                name: "i".to_string(),
                init: Some(Box::new(int_lit(5, 21, "4"))),
            },
        ),
    )]);

    let emitted = generate(&ast).unwrap();
    let json: serde_json::Value = serde_json::from_str(&emitted.position_map.to_json()).unwrap();
    assert_eq!(
        json["mappings"].as_array().unwrap().len(),
        emitted.position_map.len()
    );
}
