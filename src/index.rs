//! Arena index with a reserved sentinel.
//!
//! Nodes reference each other by slot index rather than by pointer, so a
//! forward link is a plain `u32` and "no successor" is a reserved sentinel
//! value instead of an `Option` with its extra discriminant word.

/// Index of a node slot in the arena.
///
/// `NONE` (`u32::MAX`) marks the absence of a node: an empty forward link,
/// or the sentinel head when used as a traversal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef(u32);

impl NodeRef {
    /// Sentinel value representing "no node".
    pub(crate) const NONE: Self = NodeRef(u32::MAX);

    /// Creates a reference from a slot index assigned by the arena.
    #[inline]
    pub(crate) fn from_usize(val: usize) -> Self {
        debug_assert!(val < u32::MAX as usize, "arena index exceeds u32 range");
        NodeRef(val as u32)
    }

    /// Returns the slot index for arena access.
    #[inline]
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub(crate) fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    pub(crate) fn is_some(self) -> bool {
        !self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_roundtrip() {
        assert!(NodeRef::NONE.is_none());
        assert!(!NodeRef::NONE.is_some());

        for i in [0usize, 1, 100, 65_535] {
            let r = NodeRef::from_usize(i);
            assert!(r.is_some());
            assert_eq!(r.as_usize(), i);
        }
    }
}
