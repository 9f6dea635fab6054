//! Common types and limits shared by the tsr crates.
//!
//! - Source ranges (`TextRange`)
//! - Recursion limits for tree walks

// Source offsets attached to nodes and node arrays
pub mod text_range;
pub use text_range::TextRange;

// Centralized limits and thresholds
pub mod limits;
