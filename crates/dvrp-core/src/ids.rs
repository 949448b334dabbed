//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both ids are plain indices: a `ScenarioId` selects one scenario of a batch
//! and a `NodeId` selects one node within a scenario.  The inner integer is
//! `pub` so tests can build them literally, but callers should prefer
//! `.index()` when indexing SoA `Vec`s.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a scenario within a batch.
    pub struct ScenarioId(u32);
}

typed_id! {
    /// Index of a node within a scenario.  The last node (`n_nodes - 1`) is
    /// always the depot.
    pub struct NodeId(u32);
}

impl NodeId {
    /// The depot of a scenario with `n_nodes` nodes.
    #[inline]
    pub fn depot(n_nodes: usize) -> NodeId {
        NodeId(n_nodes.saturating_sub(1) as u32)
    }

    /// `true` if this node is the depot of a scenario with `n_nodes` nodes.
    #[inline]
    pub fn is_depot(self, n_nodes: usize) -> bool {
        self == NodeId::depot(n_nodes)
    }
}
