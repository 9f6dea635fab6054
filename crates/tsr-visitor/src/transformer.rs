//! The per-node callback a rewrite applies.

use std::sync::Arc;
use tsr_ast::NodeRef;

/// Callback invoked on every visited node.
///
/// - return the input handle to keep the node
/// - return a different handle to replace it
/// - return `None` to delete it (optional slots and array elements only)
///
/// `state` belongs to the caller; the rewriter only passes it along.
/// Closures of the right shape implement this trait.
pub trait Transformer<S> {
    fn transform(&mut self, node: &NodeRef, state: &mut S) -> Option<NodeRef>;
}

impl<S, F> Transformer<S> for F
where
    F: FnMut(&NodeRef, &mut S) -> Option<NodeRef>,
{
    #[inline]
    fn transform(&mut self, node: &NodeRef, state: &mut S) -> Option<NodeRef> {
        self(node, state)
    }
}

/// Keeps every node.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<S> Transformer<S> for Identity {
    #[inline]
    fn transform(&mut self, node: &NodeRef, _state: &mut S) -> Option<NodeRef> {
        Some(Arc::clone(node))
    }
}
