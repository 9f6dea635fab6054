//! AST node types and the node factory.
//!
//! Nodes are immutable once built and handed around as [`NodeRef`]
//! (`Arc<Node>`) handles. Whether two children are "the same" is decided by
//! handle identity, never by comparing contents; the rewriter in
//! `tsr-visitor` relies on this to keep untouched subtrees shared.
//!
//! - [`SyntaxKind`]: the closed set of node kinds
//! - [`TokenKind`]: operators, punctuation and modifier keywords
//! - [`NodeFlags`]: the opaque flag set carried by every node
//! - [`Node`] / [`NodeData`]: the node header and one payload per kind
//! - [`NodeArray`]: identity-comparable child sequences
//! - [`factory`]: `create_*` / `update_*` for every kind

pub mod base;
pub use base::{
    NodeArray, NodeList, NodeRef, same_array, same_node, same_opt_array, same_opt_node,
};

pub mod flags;
pub use flags::NodeFlags;

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod token;
pub use token::{TokenKind, TypeKeyword};

pub mod node;
pub use node::*;

pub mod node_access;

pub mod factory;

pub mod samples;

pub use tsr_common::TextRange;

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod unit_tests;
