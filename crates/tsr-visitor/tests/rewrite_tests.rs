//! Structural sharing, recursion policy and deletion through the free
//! `fallback` / `visit` / `visit_nodes` entry points.

use std::sync::Arc;
use tsr_ast::factory::*;
use tsr_ast::{NodeArray, NodeRef, SyntaxKind, TextRange, TokenKind};
use tsr_visitor::{Identity, fallback, visit, visit_nodes};

fn ident(text: &str) -> NodeRef {
    create_identifier(text, None, None)
}

fn statement(text: &str) -> NodeRef {
    create_expression_statement(ident(text), None, None)
}

fn keep(node: &NodeRef, _: &mut ()) -> Option<NodeRef> {
    Some(Arc::clone(node))
}

fn is_identifier(node: &NodeRef, text: &str) -> bool {
    node.kind() == SyntaxKind::Identifier && node.text() == Some(text)
}

#[test]
fn test_doubles_numeric_literals() {
    let sum = create_binary_expression(
        create_numeric_literal(3, Some(TextRange::new(0, 1)), None),
        TokenKind::Plus,
        create_numeric_literal(4, Some(TextRange::new(4, 5)), None),
        Some(TextRange::new(0, 5)),
        None,
    );
    let mut double = |node: &NodeRef, _: &mut ()| {
        if node.kind() != SyntaxKind::NumericLiteral {
            return Some(Arc::clone(node));
        }
        let value: u32 = node.text()?.parse().ok()?;
        Some(create_numeric_literal(value * 2, Some(node.loc), Some(node.flags)))
    };

    let result = fallback(&sum, &mut double, &mut ());

    assert!(!Arc::ptr_eq(&result, &sum));
    assert_eq!(result.kind(), SyntaxKind::BinaryExpression);
    assert_eq!(result.loc, TextRange::new(0, 5));
    let data = result.as_binary_expression().expect("binary expression");
    assert_eq!(data.operator, TokenKind::Plus);
    assert_eq!(data.left.text(), Some("6"));
    assert_eq!(data.right.text(), Some("8"));
    assert_eq!(data.left.loc, TextRange::new(0, 1));
}

#[test]
fn test_replacing_middle_statement_shares_siblings() {
    let first = statement("a");
    let second = statement("b");
    let third = statement("c");
    let block = create_block(
        vec![Arc::clone(&first), Arc::clone(&second), Arc::clone(&third)],
        None,
        None,
    );
    let target = Arc::clone(&second);
    let mut replace = |node: &NodeRef, _: &mut ()| {
        if Arc::ptr_eq(node, &target) {
            return Some(statement("replacement"));
        }
        Some(Arc::clone(node))
    };

    let result = fallback(&block, &mut replace, &mut ());

    let original = block.as_block().expect("block");
    let rewritten = result.as_block().expect("block");
    assert!(!Arc::ptr_eq(&result, &block));
    assert!(!NodeArray::ptr_eq(&original.statements, &rewritten.statements));
    assert_eq!(rewritten.statements.len(), 3);
    assert!(Arc::ptr_eq(&rewritten.statements[0], &first));
    assert!(!Arc::ptr_eq(&rewritten.statements[1], &second));
    assert!(Arc::ptr_eq(&rewritten.statements[2], &third));
}

#[test]
fn test_identity_on_deep_nesting_returns_same_root() {
    let mut node = ident("x");
    for _ in 0..100 {
        node = create_parenthesized_expression(node, None, None);
    }
    let result = fallback(&node, &mut keep, &mut ());
    assert!(Arc::ptr_eq(&result, &node));
}

#[test]
fn test_identity_struct_preserves_tree() {
    let tree = tsr_ast::samples::sample_program(4);
    let result = fallback(&tree, &mut Identity, &mut ());
    assert!(Arc::ptr_eq(&result, &tree));
}

#[test]
fn test_change_propagates_to_every_ancestor_only() {
    // if (c) { a; b; } else d;
    let untouched = statement("a");
    let changed = statement("b");
    let else_branch = statement("d");
    let then_block = create_block(vec![Arc::clone(&untouched), changed], None, None);
    let root = create_if_statement(
        ident("c"),
        Arc::clone(&then_block),
        Some(Arc::clone(&else_branch)),
        Some(TextRange::new(0, 30)),
        None,
    );
    let mut rename = |node: &NodeRef, _: &mut ()| {
        if is_identifier(node, "b") {
            return Some(ident("renamed"));
        }
        Some(Arc::clone(node))
    };

    let result = fallback(&root, &mut rename, &mut ());

    let data = result.as_if_statement().expect("if statement");
    assert_eq!(result.loc, TextRange::new(0, 30));
    assert!(!Arc::ptr_eq(&data.then_statement, &then_block));
    assert!(Arc::ptr_eq(data.else_statement.as_ref().expect("else"), &else_branch));
    let block = data.then_statement.as_block().expect("block");
    assert!(Arc::ptr_eq(&block.statements[0], &untouched));
    let expression = &block.statements[1]
        .as_expression_statement()
        .expect("statement")
        .expression;
    assert!(is_identifier(expression, "renamed"));
}

#[test]
fn test_visit_none_does_not_call_transform() {
    let mut calls = 0;
    let mut count = |node: &NodeRef, calls: &mut i32| {
        *calls += 1;
        Some(Arc::clone(node))
    };
    assert!(visit(None, &mut count, &mut calls).is_none());
    assert_eq!(calls, 0);
}

#[test]
fn test_fallback_skips_the_node_itself() {
    let node = create_return_statement(Some(ident("x")), None, None);
    let mut seen = Vec::new();
    let mut record = |node: &NodeRef, seen: &mut Vec<SyntaxKind>| {
        seen.push(node.kind());
        Some(Arc::clone(node))
    };
    fallback(&node, &mut record, &mut seen);
    assert_eq!(seen, vec![SyntaxKind::Identifier]);
}

#[test]
fn test_absent_optional_slots_are_not_visited() {
    let node =
        create_for_statement(None, None, None, create_empty_statement(None, None), None, None);
    let mut seen = Vec::new();
    let mut record = |node: &NodeRef, seen: &mut Vec<SyntaxKind>| {
        seen.push(node.kind());
        Some(Arc::clone(node))
    };
    fallback(&node, &mut record, &mut seen);
    assert_eq!(seen, vec![SyntaxKind::EmptyStatement]);
}

#[test]
fn test_slots_are_visited_in_schema_order() {
    let node = create_conditional_expression(ident("c"), ident("t"), ident("f"), None, None);
    let mut order = Vec::new();
    let mut record = |node: &NodeRef, order: &mut Vec<String>| {
        order.extend(node.text().map(str::to_owned));
        Some(Arc::clone(node))
    };
    fallback(&node, &mut record, &mut order);
    assert_eq!(order, ["c", "t", "f"]);
}

#[test]
fn test_pre_order_traversal() {
    // f(a + b)
    let call = create_call_expression(
        ident("f"),
        vec![create_binary_expression(ident("a"), TokenKind::Plus, ident("b"), None, None)],
        None,
        None,
    );
    let mut order = Vec::new();
    let mut record = |node: &NodeRef, order: &mut Vec<SyntaxKind>| {
        order.push(node.kind());
        Some(Arc::clone(node))
    };
    visit(Some(&call), &mut record, &mut order);
    assert_eq!(
        order,
        [
            SyntaxKind::CallExpression,
            SyntaxKind::Identifier,
            SyntaxKind::BinaryExpression,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_replacement_is_descended_into() {
    // x  ->  (y), and every y inside the replacement becomes z
    let root = create_expression_statement(ident("x"), None, None);
    let mut rewrite = |node: &NodeRef, _: &mut ()| {
        if is_identifier(node, "x") {
            return Some(create_parenthesized_expression(ident("y"), None, None));
        }
        if is_identifier(node, "y") {
            return Some(ident("z"));
        }
        Some(Arc::clone(node))
    };

    let result = fallback(&root, &mut rewrite, &mut ());

    let expression = &result.as_expression_statement().expect("statement").expression;
    let inner = &expression.as_wrapped_expression().expect("parenthesized").expression;
    assert!(is_identifier(inner, "z"));
}

#[test]
fn test_visit_nodes_identity_returns_same_array() {
    let array = NodeArray::with_range(vec![ident("a"), ident("b")], TextRange::new(3, 9));
    let result = visit_nodes(&array, &mut keep, &mut ());
    assert!(NodeArray::ptr_eq(&result, &array));
}

#[test]
fn test_visit_nodes_drops_removed_elements_in_order() {
    let array = NodeArray::with_range(
        vec![ident("a"), ident("drop"), ident("b"), ident("drop"), ident("c")],
        TextRange::new(3, 9),
    );
    let mut remove = |node: &NodeRef, _: &mut ()| {
        if is_identifier(node, "drop") {
            return None;
        }
        Some(Arc::clone(node))
    };

    let result = visit_nodes(&array, &mut remove, &mut ());

    assert!(!NodeArray::ptr_eq(&result, &array));
    assert_eq!(result.loc(), TextRange::new(3, 9));
    let texts: Vec<_> = result.iter().filter_map(|node| node.text()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
    assert!(Arc::ptr_eq(&result[0], &array[0]));
    assert!(Arc::ptr_eq(&result[2], &array[4]));
}

#[test]
fn test_removing_first_element_keeps_the_rest() {
    let array = NodeArray::new(vec![ident("drop"), ident("b")]);
    let mut remove = |node: &NodeRef, _: &mut ()| {
        if is_identifier(node, "drop") {
            return None;
        }
        Some(Arc::clone(node))
    };
    let result = visit_nodes(&array, &mut remove, &mut ());
    assert_eq!(result.len(), 1);
    assert!(Arc::ptr_eq(&result[0], &array[1]));
}

#[test]
fn test_optional_slot_can_be_removed() {
    let node = create_return_statement(Some(ident("x")), None, None);
    let mut remove = |node: &NodeRef, _: &mut ()| {
        if node.kind() == SyntaxKind::Identifier {
            return None;
        }
        Some(Arc::clone(node))
    };
    let result = fallback(&node, &mut remove, &mut ());
    assert!(result.as_return_statement().expect("return").expression.is_none());
}

#[test]
fn test_state_is_threaded_through_every_call() {
    #[derive(Default)]
    struct Counter {
        identifiers: usize,
        total: usize,
    }
    let tree = tsr_ast::samples::sample_program(2);
    let mut counter = Counter::default();
    let mut count = |node: &NodeRef, counter: &mut Counter| {
        counter.total += 1;
        if node.kind() == SyntaxKind::Identifier {
            counter.identifiers += 1;
        }
        Some(Arc::clone(node))
    };
    let result = fallback(&tree, &mut count, &mut counter);

    assert!(Arc::ptr_eq(&result, &tree));
    // Every node below the root is visited exactly once.
    assert_eq!(counter.total, tree.count_nodes() - 1);
    assert!(counter.identifiers > 0);
}

#[test]
fn test_type_annotations_are_visited_but_not_descended() {
    let type_node = create_array_type(
        create_type_reference(ident("T"), None, None, None),
        None,
        None,
    );
    let param = create_parameter(
        ident("p"),
        None,
        Some(Arc::clone(&type_node)),
        None,
        None,
        None,
        None,
        None,
    );
    let mut seen = Vec::new();
    let mut record = |node: &NodeRef, seen: &mut Vec<SyntaxKind>| {
        seen.push(node.kind());
        Some(Arc::clone(node))
    };
    let result = fallback(&param, &mut record, &mut seen);
    assert!(Arc::ptr_eq(&result, &param));
    assert_eq!(seen, [SyntaxKind::Identifier, SyntaxKind::ArrayType]);
}

#[test]
fn test_terminal_kinds_are_returned_unchanged() {
    let node = create_break_statement(Some(ident("outer")), None, None);
    let mut calls = 0;
    let mut count = |node: &NodeRef, calls: &mut i32| {
        *calls += 1;
        Some(Arc::clone(node))
    };
    let result = fallback(&node, &mut count, &mut calls);
    assert!(Arc::ptr_eq(&result, &node));
    assert_eq!(calls, 0);
}
