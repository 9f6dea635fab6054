//! Rewrite errors.

use thiserror::Error;
use tsr_ast::SyntaxKind;

pub type RewriteResult<T> = Result<T, RewriteError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Nesting went past `RewriteOptions::max_depth`. The rewrite is
    /// abandoned as a whole; no partially rewritten tree is produced.
    #[error("rewrite nesting exceeded {limit} levels at a {kind:?} node")]
    DepthExceeded { limit: u32, kind: SyntaxKind },

    /// The transform returned `None` for a child slot that cannot be empty.
    #[error("transform removed the required `{slot}` child of a {parent:?} node")]
    RequiredChildRemoved {
        parent: SyntaxKind,
        slot: &'static str,
    },
}

impl RewriteError {
    /// Depth overruns are recoverable; a removed required child is a bug in
    /// the transform.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RewriteError::DepthExceeded { .. })
    }
}
