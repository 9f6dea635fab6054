//! Shared handle types: `NodeRef`, `NodeArray` and the identity helpers.

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;
use tsr_common::TextRange;

/// Shared handle to an immutable node.
///
/// A subtree can be reachable from several trees at once after a rewrite,
/// so children are reference counted rather than exclusively owned.
pub type NodeRef = Arc<Node>;

/// Storage behind a [`NodeArray`] handle.
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeList {
    pub loc: TextRange,
    pub nodes: Vec<NodeRef>,
}

/// An ordered, identity-comparable sequence of child nodes.
///
/// Cloning a `NodeArray` clones the handle: both copies are the same array
/// for [`NodeArray::ptr_eq`]. Building a new array from the same elements
/// yields a *different* array.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeArray(Arc<NodeList>);

impl NodeArray {
    pub fn new(nodes: Vec<NodeRef>) -> NodeArray {
        NodeArray::with_range(nodes, TextRange::default())
    }

    pub fn with_range(nodes: Vec<NodeRef>, loc: TextRange) -> NodeArray {
        NodeArray(Arc::new(NodeList { loc, nodes }))
    }

    /// An empty array. Every call returns a distinct array.
    pub fn empty() -> NodeArray {
        NodeArray::new(Vec::new())
    }

    #[inline]
    pub fn loc(&self) -> TextRange {
        self.0.loc
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeRef] {
        &self.0.nodes
    }

    /// Identity comparison: true only for handles to the same array.
    #[inline]
    pub fn ptr_eq(a: &NodeArray, b: &NodeArray) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for NodeArray {
    type Target = [NodeRef];

    fn deref(&self) -> &[NodeRef] {
        &self.0.nodes
    }
}

impl From<Vec<NodeRef>> for NodeArray {
    fn from(nodes: Vec<NodeRef>) -> NodeArray {
        NodeArray::new(nodes)
    }
}

impl<'a> IntoIterator for &'a NodeArray {
    type Item = &'a NodeRef;
    type IntoIter = std::slice::Iter<'a, NodeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.nodes.iter()
    }
}

#[inline]
pub fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    Arc::ptr_eq(a, b)
}

#[inline]
pub fn same_opt_node(a: Option<&NodeRef>, b: Option<&NodeRef>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[inline]
pub fn same_array(a: &NodeArray, b: &NodeArray) -> bool {
    NodeArray::ptr_eq(a, b)
}

#[inline]
pub fn same_opt_array(a: Option<&NodeArray>, b: Option<&NodeArray>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => NodeArray::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
