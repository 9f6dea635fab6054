//! Public entry points.

use crate::error::{RewriteError, RewriteResult};
use crate::options::{RewriteOptions, RewriteStats};
use crate::rewrite::RewriteCx;
use crate::transformer::Transformer;
use std::sync::Arc;
use tracing::{debug, debug_span, warn};
use tsr_ast::{NodeArray, NodeRef};

/// A configured rewriter that accumulates [`RewriteStats`] across calls.
///
/// The free functions [`fallback`](crate::fallback), [`visit`](crate::visit)
/// and [`visit_nodes`](crate::visit_nodes) run a default `Rewriter` once.
/// A `Rewriter` holds no tree state between calls; one instance per thread
/// is enough for parallel passes over shared trees.
#[derive(Clone, Debug, Default)]
pub struct Rewriter {
    options: RewriteOptions,
    stats: RewriteStats,
}

impl Rewriter {
    pub fn new() -> Rewriter {
        Rewriter::default()
    }

    pub fn with_options(options: RewriteOptions) -> Rewriter {
        Rewriter {
            options,
            stats: RewriteStats::default(),
        }
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Totals over every rewrite run by this instance.
    pub fn stats(&self) -> &RewriteStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = RewriteStats::default();
    }

    /// Rewrites the children of `node` without transforming `node` itself.
    pub fn try_fallback<S, T>(
        &mut self,
        node: &NodeRef,
        transform: &mut T,
        state: &mut S,
    ) -> RewriteResult<NodeRef>
    where
        T: Transformer<S> + ?Sized,
    {
        let _span = debug_span!("fallback", kind = ?node.kind()).entered();
        let mut cx = RewriteCx::new(transform, state, self.options.depth_limit());
        let result = cx.fallback(node);
        self.finish(&cx.stats, result.is_ok());
        result
    }

    /// Transforms `child` and rewrites the children of the result.
    /// An absent child stays absent and the transform is not called.
    pub fn try_visit<S, T>(
        &mut self,
        child: Option<&NodeRef>,
        transform: &mut T,
        state: &mut S,
    ) -> RewriteResult<Option<NodeRef>>
    where
        T: Transformer<S> + ?Sized,
    {
        let _span = debug_span!("visit", kind = ?child.map(|node| node.kind())).entered();
        let mut cx = RewriteCx::new(transform, state, self.options.depth_limit());
        let result = cx.visit_opt(child);
        self.finish(&cx.stats, result.is_ok());
        result
    }

    /// Visits every element of `array` in order.
    pub fn try_visit_nodes<S, T>(
        &mut self,
        array: &NodeArray,
        transform: &mut T,
        state: &mut S,
    ) -> RewriteResult<NodeArray>
    where
        T: Transformer<S> + ?Sized,
    {
        let _span = debug_span!("visit_nodes", len = array.len()).entered();
        let mut cx = RewriteCx::new(transform, state, self.options.depth_limit());
        let result = cx.visit_nodes(array);
        self.finish(&cx.stats, result.is_ok());
        result
    }

    /// Like [`Rewriter::try_fallback`], returning `node` unchanged if the
    /// depth limit is hit.
    ///
    /// # Panics
    ///
    /// If the transform removes a required child.
    pub fn fallback<S, T>(&mut self, node: &NodeRef, transform: &mut T, state: &mut S) -> NodeRef
    where
        T: Transformer<S> + ?Sized,
    {
        let result = self.try_fallback(node, transform, state);
        recover(result, || Arc::clone(node))
    }

    /// Like [`Rewriter::try_visit`], returning `child` unchanged if the depth
    /// limit is hit.
    ///
    /// # Panics
    ///
    /// If the transform removes a required child.
    pub fn visit<S, T>(
        &mut self,
        child: Option<&NodeRef>,
        transform: &mut T,
        state: &mut S,
    ) -> Option<NodeRef>
    where
        T: Transformer<S> + ?Sized,
    {
        let result = self.try_visit(child, transform, state);
        recover(result, || child.cloned())
    }

    /// Like [`Rewriter::try_visit_nodes`], returning `array` unchanged if
    /// the depth limit is hit.
    ///
    /// # Panics
    ///
    /// If the transform removes a required child.
    pub fn visit_nodes<S, T>(
        &mut self,
        array: &NodeArray,
        transform: &mut T,
        state: &mut S,
    ) -> NodeArray
    where
        T: Transformer<S> + ?Sized,
    {
        let result = self.try_visit_nodes(array, transform, state);
        recover(result, || array.clone())
    }

    fn finish(&mut self, stats: &RewriteStats, ok: bool) {
        debug!(
            visited = stats.visited,
            replaced = stats.replaced,
            removed = stats.removed,
            rebuilt = stats.rebuilt,
            max_depth = stats.max_depth_reached,
            ok,
            "rewrite finished"
        );
        self.stats.merge(stats);
    }
}

fn recover<R>(result: RewriteResult<R>, unchanged: impl FnOnce() -> R) -> R {
    match result {
        Ok(rewritten) => rewritten,
        Err(err @ RewriteError::DepthExceeded { .. }) => {
            warn!(%err, "rewrite abandoned; returning input unchanged");
            unchanged()
        }
        Err(err @ RewriteError::RequiredChildRemoved { .. }) => panic!("{err}"),
    }
}
