//! Factory behaviour: construction stores children as given, updates share
//! on no change and rebuild (keeping range, flags and payloads) otherwise.

use std::sync::Arc;
use tsr_ast::factory::*;
use tsr_ast::samples::sample_node;
use tsr_ast::{NodeArray, NodeData, NodeFlags, SyntaxKind, TextRange, TokenKind};

fn ident(text: &str) -> tsr_ast::NodeRef {
    create_identifier(text, None, None)
}

#[test]
fn test_create_stores_children_by_handle() {
    let left = ident("a");
    let right = ident("b");
    let node = create_binary_expression(
        Arc::clone(&left),
        TokenKind::Plus,
        Arc::clone(&right),
        Some(TextRange::new(0, 5)),
        Some(NodeFlags::SYNTHESIZED),
    );

    let data = node.as_binary_expression().expect("binary expression");
    assert!(Arc::ptr_eq(&data.left, &left));
    assert!(Arc::ptr_eq(&data.right, &right));
    assert_eq!(node.loc, TextRange::new(0, 5));
    assert_eq!(node.flags, NodeFlags::SYNTHESIZED);
}

#[test]
fn test_create_keeps_existing_array_identity() {
    let statements = NodeArray::new(vec![create_empty_statement(None, None)]);
    let block = create_block(statements.clone(), None, None);
    let data = block.as_block().expect("block");
    assert!(NodeArray::ptr_eq(&data.statements, &statements));
}

#[test]
fn test_numeric_literal_accepts_numbers_and_text() {
    assert_eq!(create_numeric_literal(3, None, None).text(), Some("3"));
    assert_eq!(create_numeric_literal(2.5, None, None).text(), Some("2.5"));
    assert_eq!(create_numeric_literal("0x1F", None, None).text(), Some("0x1F"));
}

#[test]
fn test_update_with_same_children_returns_input() {
    let node = create_if_statement(
        ident("c"),
        create_empty_statement(None, None),
        None,
        None,
        None,
    );
    let data = node.as_if_statement().expect("if statement");
    let updated = update_if_statement(
        &node,
        Arc::clone(&data.expression),
        Arc::clone(&data.then_statement),
        None,
    );
    assert!(Arc::ptr_eq(&updated, &node));
}

#[test]
fn test_update_with_new_child_rebuilds_and_keeps_header() {
    let node = create_return_statement(
        Some(ident("a")),
        Some(TextRange::new(10, 19)),
        Some(NodeFlags::THIS_NODE_HAS_ERROR),
    );
    let replacement = ident("b");
    let updated = update_return_statement(&node, Some(Arc::clone(&replacement)));

    assert!(!Arc::ptr_eq(&updated, &node));
    assert_eq!(updated.kind(), SyntaxKind::ReturnStatement);
    assert_eq!(updated.loc, TextRange::new(10, 19));
    assert_eq!(updated.flags, NodeFlags::THIS_NODE_HAS_ERROR);
    let data = updated.as_return_statement().expect("return statement");
    assert!(Arc::ptr_eq(data.expression.as_ref().expect("expression"), &replacement));
}

#[test]
fn test_update_dropping_optional_child_rebuilds() {
    let node = create_return_statement(Some(ident("a")), None, None);
    let updated = update_return_statement(&node, None);
    assert!(!Arc::ptr_eq(&updated, &node));
    assert!(updated.as_return_statement().expect("return").expression.is_none());
}

#[test]
fn test_update_with_equal_but_new_array_rebuilds() {
    let node = create_call_expression(ident("f"), vec![ident("x")], None, None);
    let data = node.as_call_expression().expect("call");
    let copied = NodeArray::new(data.arguments.to_vec());
    let updated = update_call_expression(&node, Arc::clone(&data.expression), copied);
    assert!(!Arc::ptr_eq(&updated, &node));
}

#[test]
fn test_update_keeps_primitive_payloads() {
    let file = create_source_file("main.ts", vec![create_empty_statement(None, None)], None, None);
    let updated = update_source_file(&file, NodeArray::empty());
    match &updated.data {
        NodeData::SourceFile(data) => {
            assert_eq!(data.file_name, "main.ts");
            assert!(data.statements.is_empty());
        }
        other => panic!("expected a source file, got {other:?}"),
    }

    let postfix = create_postfix_unary_expression(ident("i"), TokenKind::MinusMinus, None, None);
    let updated = update_postfix_unary_expression(&postfix, ident("j"));
    let data = updated.as_unary_expression().expect("unary");
    assert_eq!(data.operator, TokenKind::MinusMinus);
}

#[test]
fn test_shared_payload_kinds_stay_distinct() {
    let params = NodeArray::empty();
    let getter = create_get_accessor(ident("v"), params.clone(), None, None, None, None, None, None);
    let setter = create_set_accessor(ident("v"), params, None, None, None, None, None, None);
    assert_eq!(getter.kind(), SyntaxKind::GetAccessor);
    assert_eq!(setter.kind(), SyntaxKind::SetAccessor);

    let data = getter.as_accessor().expect("accessor");
    let rebuilt = update_get_accessor(
        &getter,
        ident("w"),
        data.parameters.clone(),
        None,
        None,
        None,
        None,
    );
    assert_eq!(rebuilt.kind(), SyntaxKind::GetAccessor);
}

#[test]
#[should_panic(expected = "update expected a SetAccessor node")]
fn test_update_on_sibling_kind_panics() {
    let getter = create_get_accessor(ident("v"), NodeArray::empty(), None, None, None, None, None, None);
    let _ = update_set_accessor(&getter, ident("v"), NodeArray::empty(), None, None, None, None);
}

#[test]
#[should_panic(expected = "update expected a WhileStatement node")]
fn test_update_on_wrong_kind_panics() {
    let node = create_do_statement(create_empty_statement(None, None), ident("c"), None, None);
    let _ = update_while_statement(&node, ident("c"), create_empty_statement(None, None));
}

#[test]
fn test_function_declaration_without_body() {
    let node = create_function_declaration(
        ident("overload"),
        NodeArray::empty(),
        None,
        None,
        None,
        None,
        None,
        None,
        Some(NodeFlags::AMBIENT),
    );
    let data = node.as_function_declaration().expect("function declaration");
    assert!(data.body.is_none());
    assert_eq!(node.flags, NodeFlags::AMBIENT);
}

#[test]
fn test_every_kind_has_a_constructor() {
    for kind in SyntaxKind::ALL {
        assert_eq!(sample_node(kind).kind(), kind);
    }
}
