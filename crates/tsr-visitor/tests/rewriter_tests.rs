//! `Rewriter` configuration, statistics and error paths.

use std::sync::Arc;
use tsr_ast::factory::*;
use tsr_ast::samples::sample_program;
use tsr_ast::{NodeArray, NodeRef, SyntaxKind};
use tsr_common::limits::MAX_REWRITE_DEPTH_CEILING;
use tsr_visitor::{Identity, RewriteError, RewriteOptions, Rewriter, fallback, try_fallback};

fn ident(text: &str) -> NodeRef {
    create_identifier(text, None, None)
}

fn nested_parens(depth: usize) -> NodeRef {
    let mut node = ident("x");
    for _ in 0..depth {
        node = create_parenthesized_expression(node, None, None);
    }
    node
}

/// Every level of a parenthesized chain, innermost first.
///
/// Holding each level keeps teardown shallow for chains too deep for the
/// recursive `Drop` of nested handles.
struct ParenChain(Vec<NodeRef>);

impl ParenChain {
    fn new(depth: usize) -> ParenChain {
        let mut levels = Vec::with_capacity(depth + 1);
        levels.push(ident("x"));
        for _ in 0..depth {
            let inner = Arc::clone(levels.last().expect("chain starts with a leaf"));
            levels.push(create_parenthesized_expression(inner, None, None));
        }
        ParenChain(levels)
    }

    fn root(&self) -> &NodeRef {
        self.0.last().expect("chain starts with a leaf")
    }
}

impl Drop for ParenChain {
    fn drop(&mut self) {
        // Outermost first: each release only frees one level.
        while let Some(level) = self.0.pop() {
            drop(level);
        }
    }
}

fn rename_x(node: &NodeRef, _: &mut ()) -> Option<NodeRef> {
    if node.kind() == SyntaxKind::Identifier && node.text() == Some("x") {
        return Some(ident("y"));
    }
    Some(Arc::clone(node))
}

fn remove_identifiers(node: &NodeRef, _: &mut ()) -> Option<NodeRef> {
    if node.kind() == SyntaxKind::Identifier {
        return None;
    }
    Some(Arc::clone(node))
}

#[test]
fn test_stats_for_identity_rewrite() {
    let tree = sample_program(3);
    let mut rewriter = Rewriter::new();
    let result = rewriter.fallback(&tree, &mut Identity, &mut ());

    assert!(Arc::ptr_eq(&result, &tree));
    let stats = rewriter.stats();
    assert_eq!(stats.visited as usize, tree.count_nodes() - 1);
    assert!(stats.is_unchanged());
    assert!(stats.max_depth_reached > 1);
}

#[test]
fn test_stats_count_replacements_and_rebuilt_ancestors() {
    // ((x)) -> ((y)): one replacement, two rebuilt parentheses
    let tree = nested_parens(2);
    let mut rewriter = Rewriter::new();
    let result = rewriter.fallback(&tree, &mut rename_x, &mut ());

    assert!(!Arc::ptr_eq(&result, &tree));
    let stats = rewriter.stats();
    assert_eq!(stats.visited, 2);
    assert_eq!(stats.replaced, 1);
    assert_eq!(stats.removed, 0);
    assert_eq!(stats.rebuilt, 2);
}

#[test]
fn test_stats_accumulate_until_reset() {
    let tree = nested_parens(3);
    let mut rewriter = Rewriter::new();
    rewriter.fallback(&tree, &mut Identity, &mut ());
    rewriter.fallback(&tree, &mut Identity, &mut ());
    assert_eq!(rewriter.stats().visited, 6);

    rewriter.reset_stats();
    assert_eq!(rewriter.stats().visited, 0);
}

#[test]
fn test_depth_limit_returns_error_from_try_fallback() {
    let tree = nested_parens(20);
    let mut rewriter = Rewriter::with_options(RewriteOptions::default().with_max_depth(8));
    let err = rewriter
        .try_fallback(&tree, &mut rename_x, &mut ())
        .expect_err("nesting is deeper than the limit");
    assert_eq!(
        err,
        RewriteError::DepthExceeded {
            limit: 8,
            kind: SyntaxKind::ParenthesizedExpression,
        }
    );
    assert!(err.is_recoverable());
}

#[test]
fn test_depth_limit_returns_input_unchanged_from_fallback() {
    let tree = nested_parens(20);
    let mut rewriter = Rewriter::with_options(RewriteOptions::default().with_max_depth(8));
    let result = rewriter.fallback(&tree, &mut rename_x, &mut ());
    assert!(Arc::ptr_eq(&result, &tree));
}

#[test]
fn test_tree_within_limit_is_rewritten() {
    let tree = nested_parens(20);
    let mut rewriter = Rewriter::with_options(RewriteOptions::default().with_max_depth(32));
    let result = rewriter.fallback(&tree, &mut rename_x, &mut ());
    assert!(!Arc::ptr_eq(&result, &tree));
    assert_eq!(result.count_nodes(), tree.count_nodes());
}

#[test]
fn test_default_limit_stops_runaway_wrapping() {
    // Every identifier is wrapped in parentheses, and the wrapper's child is
    // the identifier again, so this would never bottom out on its own.
    let mut wrap = |node: &NodeRef, _: &mut ()| {
        if node.kind() == SyntaxKind::Identifier {
            return Some(create_parenthesized_expression(Arc::clone(node), None, None));
        }
        Some(Arc::clone(node))
    };
    let root = create_expression_statement(ident("x"), None, None);
    let err = try_fallback(&root, &mut wrap, &mut ()).expect_err("runaway transform");
    assert!(matches!(err, RewriteError::DepthExceeded { .. }));

    let result = fallback(&root, &mut wrap, &mut ());
    assert!(Arc::ptr_eq(&result, &root));
}

#[test]
fn test_rewrite_at_depth_ceiling_runs_on_default_stack() {
    // Root to leaf is one `fallback` level per node: 9 999 parentheses plus
    // the identifier use the whole budget.
    let chain = ParenChain::new(MAX_REWRITE_DEPTH_CEILING as usize - 1);
    let options = RewriteOptions::default().with_max_depth(MAX_REWRITE_DEPTH_CEILING);
    let mut rewriter = Rewriter::with_options(options);

    let result = rewriter
        .try_fallback(chain.root(), &mut Identity, &mut ())
        .expect("nesting is exactly at the ceiling");

    assert!(Arc::ptr_eq(&result, chain.root()));
    assert_eq!(rewriter.stats().max_depth_reached, MAX_REWRITE_DEPTH_CEILING);
}

#[test]
fn test_nesting_past_depth_ceiling_is_an_error() {
    let chain = ParenChain::new(MAX_REWRITE_DEPTH_CEILING as usize);
    let options = RewriteOptions::default().with_max_depth(u32::MAX);
    let mut rewriter = Rewriter::with_options(options);

    let err = rewriter
        .try_fallback(chain.root(), &mut Identity, &mut ())
        .expect_err("one level past the ceiling");
    assert_eq!(
        err,
        RewriteError::DepthExceeded {
            limit: MAX_REWRITE_DEPTH_CEILING,
            kind: SyntaxKind::Identifier,
        }
    );

    let result = rewriter.fallback(chain.root(), &mut Identity, &mut ());
    assert!(Arc::ptr_eq(&result, chain.root()));
}

#[test]
fn test_removing_required_child_is_an_error() {
    let node = create_expression_statement(ident("x"), None, None);
    let err = try_fallback(&node, &mut remove_identifiers, &mut ()).expect_err("required slot");
    assert_eq!(
        err,
        RewriteError::RequiredChildRemoved {
            parent: SyntaxKind::ExpressionStatement,
            slot: "expression",
        }
    );
    assert!(!err.is_recoverable());
}

#[test]
#[should_panic(expected = "transform removed the required `right` child of a BinaryExpression")]
fn test_removing_required_child_panics_in_fallback() {
    let node = create_binary_expression(
        create_numeric_literal(1, None, None),
        tsr_ast::TokenKind::Plus,
        ident("x"),
        None,
        None,
    );
    fallback(&node, &mut remove_identifiers, &mut ());
}

#[test]
fn test_try_visit_nodes_reports_nested_errors() {
    let array = NodeArray::new(vec![create_expression_statement(ident("x"), None, None)]);
    let mut rewriter = Rewriter::new();
    let result = rewriter.try_visit_nodes(&array, &mut remove_identifiers, &mut ());
    assert!(matches!(result, Err(RewriteError::RequiredChildRemoved { .. })));
}

#[test]
fn test_options_from_json() {
    let options = RewriteOptions::from_json(r#"{ "max_depth": 3 }"#).expect("valid options");
    let mut rewriter = Rewriter::with_options(options);
    assert_eq!(rewriter.options().max_depth, 3);

    let result = rewriter.try_fallback(&nested_parens(5), &mut Identity, &mut ());
    assert!(result.is_err());
}
