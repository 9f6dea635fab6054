//! Node factory.
//!
//! One `create_*` per kind and one `update_*` per kind that has child-node
//! slots. Position and flags are explicit arguments (`None` means an empty
//! range / no flags); there is no ambient "current node" state.
//!
//! `update_*` compares each child slot with the node's current child by
//! handle identity. When all slots are identical it returns the input
//! handle and allocates nothing; otherwise it builds a new node carrying the
//! original `loc`, `flags` and primitive payloads (operator, text, ...).
//!
//! Passing `update_*` a node of another kind panics: it is a caller defect
//! and must not produce a malformed tree.

use crate::base::{NodeArray, NodeRef};
use crate::flags::NodeFlags;
use crate::node::{Node, NodeData};
use crate::syntax_kind::SyntaxKind;
use std::sync::Arc;
use tsr_common::TextRange;

/// Builds a node array; `None` range means an empty range.
pub fn create_node_array(nodes: Vec<NodeRef>, location: Option<TextRange>) -> NodeArray {
    NodeArray::with_range(nodes, location.unwrap_or_default())
}

#[inline]
pub(crate) fn finish_node(
    data: NodeData,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    Arc::new(Node {
        loc: location.unwrap_or_default(),
        flags: flags.unwrap_or_default(),
        data,
    })
}

#[cold]
#[track_caller]
pub(crate) fn kind_mismatch(node: &Node, expected: SyntaxKind) -> ! {
    panic!(
        "update expected a {expected:?} node but was given a {:?} node",
        node.kind()
    )
}

/// Extracts the payload of `node` for `$kind`, panicking on any other kind.
///
/// Textually scoped: it must stay above the `mod` declarations below.
macro_rules! expect_data {
    ($node:expr, $kind:ident) => {
        match &$node.data {
            $crate::node::NodeData::$kind(data) => data,
            _ => $crate::factory::kind_mismatch($node, $crate::syntax_kind::SyntaxKind::$kind),
        }
    };
}

mod declarations;
mod expressions;
mod names;
mod statements;
mod types;

pub use declarations::*;
pub use expressions::*;
pub use names::*;
pub use statements::*;
pub use types::*;
