//! End-to-end passes through the facade crate.

use std::sync::Arc;
use tsr::factory::*;
use tsr::{NodeArray, NodeRef, RewriteOptions, Rewriter, SyntaxKind, TextRange, TokenKind};

fn setup() {
    tsr::tracing_config::init_tracing();
}

fn fold_addition(node: &NodeRef, _: &mut ()) -> Option<NodeRef> {
    let Some(data) = node.as_binary_expression() else {
        return Some(Arc::clone(node));
    };
    if data.operator != TokenKind::Plus {
        return Some(Arc::clone(node));
    }
    let value = |operand: &NodeRef| operand.text().and_then(|text| text.parse::<i64>().ok());
    match (value(&data.left), value(&data.right)) {
        (Some(left), Some(right)) => {
            Some(create_numeric_literal(left + right, Some(node.loc), Some(node.flags)))
        }
        _ => Some(Arc::clone(node)),
    }
}

#[test]
fn test_scenario_double_literals() {
    setup();
    let root = create_expression_statement(
        create_binary_expression(
            create_numeric_literal(3, None, None),
            TokenKind::Plus,
            create_numeric_literal(4, None, None),
            None,
            None,
        ),
        None,
        None,
    );
    let mut double = |node: &NodeRef, _: &mut ()| {
        if node.kind() == SyntaxKind::NumericLiteral {
            let value: u64 = node.text()?.parse().ok()?;
            return Some(create_numeric_literal(value * 2, Some(node.loc), None));
        }
        Some(Arc::clone(node))
    };

    let result = tsr::fallback(&root, &mut double, &mut ());

    let expression = &result.as_expression_statement().expect("statement").expression;
    let sum = expression.as_binary_expression().expect("binary expression");
    assert_eq!(sum.left.text(), Some("6"));
    assert_eq!(sum.right.text(), Some("8"));
}

#[test]
fn test_scenario_replace_middle_statement() {
    setup();
    let statements: Vec<NodeRef> = ["first", "second", "third"]
        .into_iter()
        .map(|name| create_expression_statement(create_identifier(name, None, None), None, None))
        .collect();
    let file = create_source_file("input.ts", statements, Some(TextRange::new(0, 20)), None);
    let mut replace_second = |node: &NodeRef, _: &mut ()| {
        let is_second = node
            .as_expression_statement()
            .is_some_and(|data| data.expression.text() == Some("second"));
        if is_second {
            return Some(create_empty_statement(Some(node.loc), None));
        }
        Some(Arc::clone(node))
    };

    let result = tsr::fallback(&file, &mut replace_second, &mut ());

    let before = file.as_source_file().expect("source file");
    let after = result.as_source_file().expect("source file");
    assert_eq!(after.file_name, "input.ts");
    assert_eq!(result.loc, TextRange::new(0, 20));
    assert!(Arc::ptr_eq(&after.statements[0], &before.statements[0]));
    assert_eq!(after.statements[1].kind(), SyntaxKind::EmptyStatement);
    assert!(Arc::ptr_eq(&after.statements[2], &before.statements[2]));
}

#[test]
fn test_scenario_deep_parentheses_identity() {
    setup();
    let mut node = create_identifier("x", None, None);
    for _ in 0..200 {
        node = create_parenthesized_expression(node, None, None);
    }
    let mut rewriter = Rewriter::new();
    let result = rewriter.fallback(&node, &mut tsr::Identity, &mut ());
    assert!(Arc::ptr_eq(&result, &node));
    assert_eq!(rewriter.stats().visited, 200);
}

#[test]
fn test_constant_folding_shares_untouched_functions() {
    setup();
    let program = tsr::ast::samples::sample_program(5);
    let mut rewriter = Rewriter::with_options(RewriteOptions::default());
    let folded = rewriter.fallback(&program, &mut fold_addition, &mut ());

    // sample_program sums a literal and an identifier, which does not fold.
    assert!(Arc::ptr_eq(&folded, &program));
    assert!(rewriter.stats().is_unchanged());
}

#[test]
fn test_constant_folding_rewrites_nested_sums() {
    setup();
    // (1 + 2) + 3 folds inner first, then the outer sum is rebuilt.
    let inner = create_binary_expression(
        create_numeric_literal(1, None, None),
        TokenKind::Plus,
        create_numeric_literal(2, None, None),
        None,
        None,
    );
    let outer = create_binary_expression(
        create_parenthesized_expression(inner, None, None),
        TokenKind::Plus,
        create_numeric_literal(3, None, None),
        None,
        None,
    );
    let statement = create_expression_statement(outer, None, None);

    let result = tsr::fallback(&statement, &mut fold_addition, &mut ());

    let expression = &result.as_expression_statement().expect("statement").expression;
    let sum = expression.as_binary_expression().expect("outer sum is kept");
    let parenthesized = sum.left.as_wrapped_expression().expect("parentheses");
    assert_eq!(parenthesized.expression.text(), Some("3"));
}

#[test]
fn test_pass_collects_state_while_renaming() {
    setup();
    let program = tsr::ast::samples::sample_program(3);
    let mut renamed = Vec::new();
    let mut rename_log = |node: &NodeRef, renamed: &mut Vec<TextRange>| {
        if node.text() == Some("log") {
            renamed.push(node.loc);
            return Some(create_identifier("console_log", Some(node.loc), Some(node.flags)));
        }
        Some(Arc::clone(node))
    };

    let result = tsr::fallback(&program, &mut rename_log, &mut renamed);

    assert_eq!(renamed.len(), 3);
    let before = program.as_source_file().expect("source file");
    let after = result.as_source_file().expect("source file");
    assert!(!NodeArray::ptr_eq(&before.statements, &after.statements));
    for (old, new) in before.statements.iter().zip(after.statements.iter()) {
        assert!(!Arc::ptr_eq(old, new));
        assert_eq!(old.loc, new.loc);
        // The parameter list holds no `log` and stays shared.
        let old_fn = old.as_function_declaration().expect("function");
        let new_fn = new.as_function_declaration().expect("function");
        assert!(NodeArray::ptr_eq(&old_fn.parameters, &new_fn.parameters));
        assert!(Arc::ptr_eq(&old_fn.name, &new_fn.name));
    }
}
