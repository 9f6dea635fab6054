use crate::base::{NodeArray, same_opt_array, same_opt_node};
use crate::factory::*;
use crate::flags::NodeFlags;
use crate::syntax_kind::SyntaxKind;
use crate::token::TokenKind;
use std::sync::Arc;
use tsr_common::TextRange;

#[test]
fn test_defaults_are_empty_range_and_flags() {
    let node = create_identifier("x", None, None);
    assert_eq!(node.loc, TextRange::default());
    assert_eq!(node.flags, NodeFlags::empty());
}

#[test]
fn test_cloned_array_handle_is_same_array() {
    let array = NodeArray::new(vec![create_identifier("a", None, None)]);
    let copy = array.clone();
    assert!(NodeArray::ptr_eq(&array, &copy));
}

#[test]
fn test_rebuilt_array_with_same_elements_is_different() {
    let a = create_identifier("a", None, None);
    let first = NodeArray::new(vec![Arc::clone(&a)]);
    let second = NodeArray::new(vec![a]);
    assert!(!NodeArray::ptr_eq(&first, &second));
}

#[test]
fn test_empty_arrays_are_distinct() {
    assert!(!NodeArray::ptr_eq(&NodeArray::empty(), &NodeArray::empty()));
}

#[test]
fn test_absent_and_present_slots_differ() {
    let node = create_identifier("x", None, None);
    assert!(same_opt_node(None, None));
    assert!(!same_opt_node(Some(&node), None));
    assert!(!same_opt_node(None, Some(&node)));

    let array = NodeArray::empty();
    assert!(same_opt_array(None, None));
    assert!(!same_opt_array(Some(&array), None));
}

#[test]
fn test_node_array_keeps_range() {
    let range = TextRange::new(4, 9);
    let array = create_node_array(vec![create_identifier("a", None, None)], Some(range));
    assert_eq!(array.loc(), range);
    assert_eq!(array.len(), 1);
}

#[test]
fn test_kind_mismatch_message_names_both_kinds() {
    let ident = create_identifier("x", None, None);
    let result = std::panic::catch_unwind(|| update_block(&ident, NodeArray::empty()));
    let payload = result.expect_err("update on the wrong kind must panic");
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default();
    assert!(message.contains("Block"), "message: {message}");
    assert!(message.contains("Identifier"), "message: {message}");
}

#[test]
fn test_operator_is_carried_by_update() {
    let left = create_numeric_literal(1, None, None);
    let right = create_numeric_literal(2, None, None);
    let node = create_binary_expression(left, TokenKind::Asterisk, right, None, None);
    let updated = update_binary_expression(
        &node,
        create_numeric_literal(5, None, None),
        create_numeric_literal(6, None, None),
    );
    let data = updated.as_binary_expression().expect("binary expression");
    assert_eq!(data.operator, TokenKind::Asterisk);
    assert_eq!(updated.kind(), SyntaxKind::BinaryExpression);
}

#[test]
fn test_flags_masks_cover_their_members() {
    assert!(NodeFlags::MODIFIER.contains(NodeFlags::ASYNC));
    assert!(NodeFlags::BLOCK_SCOPED.contains(NodeFlags::LET | NodeFlags::CONST));
    assert!(!NodeFlags::ACCESSIBILITY_MODIFIER.contains(NodeFlags::STATIC));
}
