//! Generic structural-sharing rewriter.
//!
//! A rewrite applies a [`Transformer`] to every node below a root and
//! rebuilds only the ancestors of what changed. Untouched subtrees, and
//! untouched node arrays, come back as the very same handles, so callers
//! can test "did anything change?" with `Arc::ptr_eq`.
//!
//! ```
//! use tsr_ast::factory::*;
//! use tsr_ast::{NodeRef, TokenKind};
//!
//! let sum = create_binary_expression(
//!     create_numeric_literal(3, None, None),
//!     TokenKind::Plus,
//!     create_numeric_literal(4, None, None),
//!     None,
//!     None,
//! );
//! let mut doubled = |node: &NodeRef, _: &mut ()| match node.as_literal() {
//!     Some(lit) if node.kind() == tsr_ast::SyntaxKind::NumericLiteral => {
//!         let value: u32 = lit.text.parse().ok()?;
//!         Some(create_numeric_literal(value * 2, Some(node.loc), Some(node.flags)))
//!     }
//!     _ => Some(node.clone()),
//! };
//! let result = tsr_visitor::fallback(&sum, &mut doubled, &mut ());
//! let data = result.as_binary_expression().unwrap();
//! assert_eq!(data.left.text(), Some("6"));
//! assert_eq!(data.right.text(), Some("8"));
//! ```

pub mod error;
pub use error::{RewriteError, RewriteResult};

pub mod options;
pub use options::{RewriteOptions, RewriteStats};

pub mod transformer;
pub use transformer::{Identity, Transformer};

mod rewrite;

pub mod rewriter;
pub use rewriter::Rewriter;

use tsr_ast::{NodeArray, NodeRef};

/// Rewrites the children of `node` with a default [`Rewriter`].
///
/// The transform is not applied to `node` itself. Terminal kinds come back
/// unchanged.
///
/// # Panics
///
/// If the transform removes a required child.
pub fn fallback<S, T>(node: &NodeRef, transform: &mut T, state: &mut S) -> NodeRef
where
    T: Transformer<S> + ?Sized,
{
    Rewriter::new().fallback(node, transform, state)
}

/// Transforms `child`, then rewrites the children of the result. `None`
/// stays `None` without calling the transform.
///
/// # Panics
///
/// If the transform removes a required child.
pub fn visit<S, T>(child: Option<&NodeRef>, transform: &mut T, state: &mut S) -> Option<NodeRef>
where
    T: Transformer<S> + ?Sized,
{
    Rewriter::new().visit(child, transform, state)
}

/// Visits every element in order, dropping the ones the transform removes.
///
/// Returns the input handle when no element changed; otherwise a new array
/// with the input's range.
///
/// # Panics
///
/// If the transform removes a required child.
pub fn visit_nodes<S, T>(array: &NodeArray, transform: &mut T, state: &mut S) -> NodeArray
where
    T: Transformer<S> + ?Sized,
{
    Rewriter::new().visit_nodes(array, transform, state)
}

pub fn try_fallback<S, T>(node: &NodeRef, transform: &mut T, state: &mut S) -> RewriteResult<NodeRef>
where
    T: Transformer<S> + ?Sized,
{
    Rewriter::new().try_fallback(node, transform, state)
}

pub fn try_visit<S, T>(
    child: Option<&NodeRef>,
    transform: &mut T,
    state: &mut S,
) -> RewriteResult<Option<NodeRef>>
where
    T: Transformer<S> + ?Sized,
{
    Rewriter::new().try_visit(child, transform, state)
}
