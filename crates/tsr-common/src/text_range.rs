//! Half-open source ranges.

use serde::{Deserialize, Serialize};

/// A half-open `[pos, end)` interval of source offsets.
///
/// Attached to nodes and node arrays for diagnostics and printing. The AST
/// layer copies ranges around but never interprets them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub pos: u32,
    pub end: u32,
}

impl TextRange {
    #[inline]
    pub const fn new(pos: u32, end: u32) -> TextRange {
        TextRange { pos, end }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.pos
    }

    /// Whether `offset` falls inside the range (end excluded).
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.pos <= offset && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_empty() {
        let range = TextRange::default();
        assert_eq!(range, TextRange::new(0, 0));
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn contains_excludes_end() {
        let range = TextRange::new(4, 8);
        assert!(range.contains(4));
        assert!(range.contains(7));
        assert!(!range.contains(8));
        assert!(!range.contains(3));
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn inverted_range_has_zero_len() {
        let range = TextRange::new(9, 3);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn serializes_as_pos_end_object() {
        let json = serde_json::to_string(&TextRange::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"pos":1,"end":2}"#);
    }
}
