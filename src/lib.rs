//! AST construction and rewriting for the tsr compiler front end.
//!
//! This crate ties the workspace together:
//!
//! - [`ast`]: node kinds, nodes, node arrays and the `create_*` / `update_*`
//!   factory
//! - [`visitor`]: the generic rewriter that keeps untouched subtrees shared
//! - [`tracing_config`]: opt-in log output for debugging passes
//!
//! A transform pass is a function from node to node; the rewriter applies it
//! everywhere below a root and rebuilds only what changed:
//!
//! ```
//! use std::sync::Arc;
//! use tsr::factory::*;
//! use tsr::{NodeRef, SyntaxKind};
//!
//! let block = create_block(
//!     vec![
//!         create_expression_statement(create_identifier("a", None, None), None, None),
//!         create_debugger_statement(None, None),
//!     ],
//!     None,
//!     None,
//! );
//! let mut strip_debugger = |node: &NodeRef, _: &mut ()| {
//!     (node.kind() != SyntaxKind::DebuggerStatement).then(|| Arc::clone(node))
//! };
//! let stripped = tsr::fallback(&block, &mut strip_debugger, &mut ());
//! assert_eq!(stripped.as_block().unwrap().statements.len(), 1);
//! ```

// Shared ranges and limits
pub use tsr_common as common;
pub use tsr_common::TextRange;
pub use tsr_common::limits;

// Nodes and the node factory
pub use tsr_ast as ast;
pub use tsr_ast::{
    Node, NodeArray, NodeData, NodeFlags, NodeRef, SyntaxKind, TokenKind, TypeKeyword, factory,
    same_array, same_node, same_opt_array, same_opt_node,
};

// Structural-sharing rewriter
pub use tsr_visitor as visitor;
pub use tsr_visitor::{
    Identity, RewriteError, RewriteOptions, RewriteStats, Rewriter, Transformer, fallback,
    try_fallback, try_visit, visit, visit_nodes,
};

// Tracing subscriber setup
pub mod tracing_config;
