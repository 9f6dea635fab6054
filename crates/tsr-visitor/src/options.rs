//! Rewrite configuration and counters.

use serde::{Deserialize, Serialize};
use tsr_common::limits::{MAX_REWRITE_DEPTH, MAX_REWRITE_DEPTH_CEILING};

/// Rewrite configuration.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// let options = tsr_visitor::RewriteOptions::from_json(r#"{ "max_depth": 64 }"#).unwrap();
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteOptions {
    /// Maximum number of nested `visit` levels below the rewrite root.
    pub max_depth: u32,
}

impl Default for RewriteOptions {
    fn default() -> RewriteOptions {
        RewriteOptions {
            max_depth: MAX_REWRITE_DEPTH,
        }
    }
}

impl RewriteOptions {
    pub fn from_json(json: &str) -> serde_json::Result<RewriteOptions> {
        serde_json::from_str(json)
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> RewriteOptions {
        self.max_depth = max_depth;
        self
    }

    /// `max_depth` clamped to the hard ceiling.
    pub(crate) fn depth_limit(&self) -> u32 {
        self.max_depth.min(MAX_REWRITE_DEPTH_CEILING)
    }
}

/// Counters collected while rewriting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    /// Nodes handed to the transform.
    pub visited: u64,
    /// Transform results that were a different node than the input.
    pub replaced: u64,
    /// Transform results that were `None`.
    pub removed: u64,
    /// Parents reconstructed because a child changed.
    pub rebuilt: u64,
    /// Deepest nesting level entered.
    pub max_depth_reached: u32,
}

impl RewriteStats {
    pub fn merge(&mut self, other: &RewriteStats) {
        self.visited += other.visited;
        self.replaced += other.replaced;
        self.removed += other.removed;
        self.rebuilt += other.rebuilt;
        self.max_depth_reached = self.max_depth_reached.max(other.max_depth_reached);
    }

    /// True when no node was replaced, removed or rebuilt.
    pub fn is_unchanged(&self) -> bool {
        self.replaced == 0 && self.removed == 0 && self.rebuilt == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth_comes_from_limits() {
        assert_eq!(RewriteOptions::default().max_depth, MAX_REWRITE_DEPTH);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let options = RewriteOptions::from_json("{}").unwrap();
        assert_eq!(options, RewriteOptions::default());
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        assert!(RewriteOptions::from_json(r#"{ "max_depth": "deep" }"#).is_err());
    }

    #[test]
    fn test_depth_limit_is_clamped() {
        let options = RewriteOptions::default().with_max_depth(u32::MAX);
        assert_eq!(options.depth_limit(), MAX_REWRITE_DEPTH_CEILING);
    }

    #[test]
    fn test_merge_accumulates() {
        let mut total = RewriteStats {
            visited: 3,
            max_depth_reached: 4,
            ..RewriteStats::default()
        };
        total.merge(&RewriteStats {
            visited: 2,
            replaced: 1,
            max_depth_reached: 2,
            ..RewriteStats::default()
        });
        assert_eq!(total.visited, 5);
        assert_eq!(total.replaced, 1);
        assert_eq!(total.max_depth_reached, 4);
        assert!(!total.is_unchanged());
    }
}
