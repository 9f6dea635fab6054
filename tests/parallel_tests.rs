//! Trees are `Send + Sync`; independent passes can share one input tree.

use rayon::prelude::*;
use std::sync::Arc;
use tsr::factory::create_identifier;
use tsr::{NodeArray, NodeRef, Rewriter};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_nodes_and_arrays_are_send_sync() {
    assert_send_sync::<NodeRef>();
    assert_send_sync::<NodeArray>();
    assert_send_sync::<Rewriter>();
}

#[test]
fn test_parallel_renames_share_the_input() {
    let program = tsr::ast::samples::sample_program(16);
    let targets = ["x", "y", "log", "missing"];

    let results: Vec<(usize, NodeRef, u64)> = targets
        .par_iter()
        .enumerate()
        .map(|(index, target)| {
            let mut rename = |node: &NodeRef, _: &mut ()| {
                if node.text() == Some(*target) {
                    return Some(create_identifier(format!("{target}_{index}"), Some(node.loc), None));
                }
                Some(Arc::clone(node))
            };
            let mut rewriter = Rewriter::new();
            let result = rewriter.fallback(&program, &mut rename, &mut ());
            (index, result, rewriter.stats().replaced)
        })
        .collect();

    for (index, result, replaced) in results {
        if targets[index] == "missing" {
            assert!(Arc::ptr_eq(&result, &program));
            assert_eq!(replaced, 0);
        } else {
            assert!(!Arc::ptr_eq(&result, &program));
            assert!(replaced >= 16);
        }
    }
    // The input is untouched and still fully owned by this thread.
    assert_eq!(Arc::strong_count(&program), 1);
}

#[test]
fn test_parallel_identity_rewrites_return_the_same_root() {
    let program = tsr::ast::samples::sample_program(8);
    let same = (0..32)
        .into_par_iter()
        .map(|_| tsr::fallback(&program, &mut tsr::Identity, &mut ()))
        .all(|result| Arc::ptr_eq(&result, &program));
    assert!(same);
}
