//! Centralized limits for the AST layer.
//!
//! Tree walks in this workspace are recursive. Each nested level costs a
//! handful of stack frames, so every recursive walk carries a depth budget
//! drawn from here instead of a local literal.

/// Maximum nesting depth for a single rewrite.
///
/// Counts nested `visit` levels, one per node on the path from the rewrite
/// root. A rewrite that goes deeper is abandoned as a whole and the input
/// tree is returned untouched. Used as the default of
/// `tsr_visitor::RewriteOptions::max_depth`.
///
/// # TypeScript example
///
/// ```typescript
/// // Deeply nested parenthesized expressions:
/// const x = ((((((((((((((((((((((((((((((1))))))))))))))))))))))))))))));
///
/// // Long left-leaning binary chains:
/// const s = a + b + c + d + e + /* ... 500 operands ... */ z;
/// ```
pub const MAX_REWRITE_DEPTH: u32 = 500;

/// Hard ceiling a caller may raise `max_depth` to.
///
/// The rewriter grows its stack on the heap (see [`REWRITE_STACK_RED_ZONE`]),
/// so this bounds memory per rewrite rather than the thread's stack size.
pub const MAX_REWRITE_DEPTH_CEILING: u32 = 10_000;

/// Free stack a rewrite level must have before it descends.
///
/// One unoptimized level (`visit`, `fallback`, dispatch, per-kind method)
/// takes about 2 KB; the margin covers the transform callback as well.
pub const REWRITE_STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated when the red zone is reached.
pub const REWRITE_STACK_SEGMENT: usize = 2 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth_is_below_ceiling() {
        assert!(MAX_REWRITE_DEPTH < MAX_REWRITE_DEPTH_CEILING);
    }

    #[test]
    fn stack_segment_exceeds_red_zone() {
        assert!(REWRITE_STACK_SEGMENT > REWRITE_STACK_RED_ZONE);
    }
}
