//! Every kind is constructible, passes through the rewriter, and has each of
//! its child slots visited.

use std::sync::Arc;
use tsr::ast::samples::{sample_node, sample_program};
use tsr::{Identity, NodeRef, SyntaxKind, fallback};

/// Kinds the rewriter returns without descending.
fn is_terminal(kind: SyntaxKind) -> bool {
    kind.is_literal()
        || kind.is_keyword()
        || kind.is_type_node()
        || matches!(
            kind,
            SyntaxKind::Identifier
                | SyntaxKind::Token
                | SyntaxKind::GeneratedLabel
                | SyntaxKind::OmittedExpression
                | SyntaxKind::BreakStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::DebuggerStatement
                | SyntaxKind::EmptyStatement
                | SyntaxKind::ShorthandPropertyAssignment
        )
}

/// True when the rewriter reaches an identifier somewhere inside `node`.
fn reaches_identifier(node: &NodeRef) -> bool {
    node.kind() == SyntaxKind::Identifier
        || (!is_terminal(node.kind()) && node.children().into_iter().any(reaches_identifier))
}

fn record(node: &NodeRef, seen: &mut Vec<NodeRef>) -> Option<NodeRef> {
    seen.push(Arc::clone(node));
    Some(Arc::clone(node))
}

#[test]
fn test_all_kinds_are_distinct_and_complete() {
    let mut kinds = SyntaxKind::ALL.to_vec();
    kinds.sort();
    kinds.dedup();
    assert_eq!(kinds.len(), SyntaxKind::ALL.len());
    for kind in SyntaxKind::ALL {
        assert_eq!(sample_node(kind).kind(), kind);
    }
}

#[test]
fn test_identity_rewrite_preserves_every_kind() {
    for kind in SyntaxKind::ALL {
        let node = sample_node(kind);
        let result = fallback(&node, &mut Identity, &mut ());
        assert!(Arc::ptr_eq(&result, &node), "{kind:?} was rebuilt");
    }
}

#[test]
fn test_every_child_slot_is_visited_in_order() {
    for kind in SyntaxKind::ALL {
        let node = sample_node(kind);
        let mut seen = Vec::new();
        fallback(&node, &mut record, &mut seen);

        if is_terminal(kind) {
            assert!(seen.is_empty(), "{kind:?} should be terminal");
            continue;
        }

        let children = node.children();
        assert!(!children.is_empty(), "{kind:?} sample has no children");
        let positions: Vec<usize> = children
            .iter()
            .map(|child| {
                seen.iter()
                    .position(|visited| Arc::ptr_eq(visited, child))
                    .unwrap_or_else(|| panic!("{kind:?}: child {:?} not visited", child.kind()))
            })
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "{kind:?}: children visited out of order"
        );
    }
}

#[test]
fn test_rebuilt_nodes_keep_kind_range_and_flags() {
    let mut rename = |node: &NodeRef, _: &mut ()| {
        if node.kind() == SyntaxKind::Identifier {
            return Some(tsr::factory::create_identifier("renamed", None, None));
        }
        Some(Arc::clone(node))
    };
    let mut rebuilt = 0;
    for kind in SyntaxKind::ALL {
        let node = sample_node(kind);
        let result = fallback(&node, &mut rename, &mut ());
        assert_eq!(result.kind(), node.kind());
        assert_eq!(result.loc, node.loc);
        assert_eq!(result.flags, node.flags);

        let renames_a_child =
            !is_terminal(kind) && node.children().into_iter().any(reaches_identifier);
        if renames_a_child {
            assert!(!Arc::ptr_eq(&result, &node), "{kind:?} was not rebuilt");
            rebuilt += 1;
        } else {
            assert!(Arc::ptr_eq(&result, &node), "{kind:?} changed without a rename");
        }
    }
    // Most non-terminal samples carry an identifier the rewriter can reach.
    assert!(rebuilt > 30, "only {rebuilt} kinds were rebuilt");
}

#[test]
fn test_rewrite_does_not_mutate_input() {
    let tree = sample_program(3);
    let before = tree.to_json().expect("serializable");

    let mut rename = |node: &NodeRef, _: &mut ()| {
        if node.text() == Some("x") {
            return Some(tsr::factory::create_identifier("renamed", Some(node.loc), None));
        }
        Some(Arc::clone(node))
    };
    let result = fallback(&tree, &mut rename, &mut ());

    assert!(!Arc::ptr_eq(&result, &tree));
    assert_eq!(tree.to_json().expect("serializable"), before);
    assert_ne!(result.to_json().expect("serializable"), before);
}
