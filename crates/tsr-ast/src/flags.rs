//! Node flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags carried verbatim on every node.
    ///
    /// Modifier bits mirror the node's modifier tokens; the remaining bits
    /// are parser markers. The factory and the rewriter copy the whole set
    /// and never look at individual bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct NodeFlags: u32 {
        const EXPORT = 1 << 0;
        const AMBIENT = 1 << 1;
        const PUBLIC = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        const STATIC = 1 << 5;
        const DEFAULT = 1 << 6;
        const ASYNC = 1 << 7;
        const LET = 1 << 8;
        const CONST = 1 << 9;
        const OCTAL_LITERAL = 1 << 10;
        const OPTIONAL_MEMBER = 1 << 11;
        const THIS_NODE_HAS_ERROR = 1 << 12;
        /// Node was produced by a transform rather than the parser.
        const SYNTHESIZED = 1 << 13;

        const MODIFIER = Self::EXPORT.bits()
            | Self::AMBIENT.bits()
            | Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::STATIC.bits()
            | Self::DEFAULT.bits()
            | Self::ASYNC.bits();
        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits();
        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits();
    }
}

impl Default for NodeFlags {
    fn default() -> NodeFlags {
        NodeFlags::empty()
    }
}
