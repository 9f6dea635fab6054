//! Read-only navigation: kinds, child order, subtree size, JSON dumps.

use std::sync::Arc;
use tsr_ast::factory::*;
use tsr_ast::samples::{sample_node, sample_program};
use tsr_ast::{NodeArray, NodeFlags, SyntaxKind, TokenKind};

#[test]
fn test_children_follow_schema_order() {
    let name = create_identifier("f", None, None);
    let param = create_parameter(
        create_identifier("x", None, None),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    );
    let body = create_block(NodeArray::empty(), None, None);
    let star = create_token(TokenKind::Asterisk, None, None);
    let node = create_function_declaration(
        Arc::clone(&name),
        vec![Arc::clone(&param)],
        Some(Arc::clone(&body)),
        None,
        None,
        None,
        Some(Arc::clone(&star)),
        None,
        None,
    );

    let children = node.children();
    assert_eq!(children.len(), 4);
    assert!(Arc::ptr_eq(children[0], &name));
    assert!(Arc::ptr_eq(children[1], &param));
    assert!(Arc::ptr_eq(children[2], &body));
    assert!(Arc::ptr_eq(children[3], &star));
}

#[test]
fn test_absent_children_are_skipped() {
    let node =
        create_for_statement(None, None, None, create_empty_statement(None, None), None, None);
    assert_eq!(node.children().len(), 1);
}

#[test]
fn test_atoms_have_no_children() {
    for kind in SyntaxKind::ALL {
        if kind.is_literal() || kind.is_keyword() {
            assert!(sample_node(kind).children().is_empty(), "{kind:?}");
        }
    }
}

#[test]
fn test_every_non_atom_sample_has_children() {
    let childless = [
        SyntaxKind::Token,
        SyntaxKind::Identifier,
        SyntaxKind::KeywordType,
        SyntaxKind::GeneratedLabel,
        SyntaxKind::OmittedExpression,
        SyntaxKind::EmptyStatement,
        SyntaxKind::DebuggerStatement,
    ];
    for kind in SyntaxKind::ALL {
        if kind.is_literal() || kind.is_keyword() || childless.contains(&kind) {
            continue;
        }
        assert!(!sample_node(kind).children().is_empty(), "{kind:?}");
    }
}

#[test]
fn test_text_of_atoms() {
    assert_eq!(create_identifier("name", None, None).text(), Some("name"));
    assert_eq!(create_string_literal("hi", None, None).text(), Some("hi"));
    assert_eq!(create_null_keyword(None, None).text(), None);
}

#[test]
fn test_count_nodes() {
    let node = create_binary_expression(
        create_numeric_literal(3, None, None),
        TokenKind::Plus,
        create_numeric_literal(4, None, None),
        None,
        None,
    );
    assert_eq!(node.count_nodes(), 3);

    // Each generated function contributes the same number of nodes.
    let one = sample_program(1).count_nodes();
    let three = sample_program(3).count_nodes();
    assert_eq!(three - 1, 3 * (one - 1));
}

#[test]
fn test_count_nodes_handles_deep_nesting() {
    let mut node = create_identifier("x", None, None);
    for _ in 0..2_000 {
        node = create_parenthesized_expression(node, None, None);
    }
    assert_eq!(node.count_nodes(), 2_001);
}

#[test]
fn test_to_json_includes_kind_and_flags() {
    let node = create_variable_declaration_list(
        vec![create_variable_declaration(create_identifier("v", None, None), None, None, None)],
        None,
        Some(NodeFlags::CONST),
    );
    let json = node.to_json().expect("serializable");
    assert!(json.contains("VariableDeclarationList"));
    assert!(json.contains("\"v\""));
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["flags"], serde_json::json!("CONST"));
}

#[test]
fn test_typed_accessors_reject_other_kinds() {
    let block = create_block(NodeArray::empty(), None, None);
    assert!(block.as_block().is_some());
    assert!(block.as_if_statement().is_none());
    assert!(block.as_literal().is_none());
}
