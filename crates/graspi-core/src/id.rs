//! Stable ID newtype for graph vertices.
//!
//! [`VertexId`] is a newtype wrapper over `u32`, providing type safety so
//! that a vertex identifier cannot be confused with an arbitrary integer.
//! Grid vertices occupy the dense range `0..N-1` in row-major coordinate
//! order; meta-vertices (interface, boundary faces) are appended after and
//! occupy `N..N+m-1`.

use std::fmt;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Dense vertex identifier. Maps to a petgraph `NodeIndex<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Returns the identifier as a plain `usize` index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Bridge between VertexId and petgraph's NodeIndex<u32>.

impl From<NodeIndex<u32>> for VertexId {
    fn from(idx: NodeIndex<u32>) -> Self {
        VertexId(idx.index() as u32)
    }
}

impl From<VertexId> for NodeIndex<u32> {
    fn from(id: VertexId) -> Self {
        NodeIndex::new(id.0 as usize)
    }
}
