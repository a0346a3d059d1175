//! Edge records for the microstructure graph.
//!
//! Lattice edges connect grid cells produced by the half-neighborhood
//! offset sweep; each carries a `crosses_phase` flag set during labeling.
//! Contraction destroys every crossing lattice edge and replaces it with a
//! link to the interface meta-vertex; boundary faces are wired with their
//! own link kind so the two star topologies stay distinguishable.

use serde::{Deserialize, Serialize};

/// The record attached to every undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// A grid adjacency between two cells.
    Lattice {
        /// `true` when the endpoints carried different phases at labeling
        /// time. After contraction no lattice edge has this flag set.
        crosses_phase: bool,
    },
    /// A link from a cell to the interface meta-vertex.
    InterfaceLink,
    /// A link from a cell to a boundary face meta-vertex.
    FaceLink,
}

impl EdgeKind {
    /// Returns `true` for grid adjacencies between two cells.
    pub fn is_lattice(&self) -> bool {
        matches!(self, EdgeKind::Lattice { .. })
    }

    /// Returns `true` for a lattice edge whose endpoints disagree in phase.
    pub fn crosses_phase(&self) -> bool {
        matches!(
            self,
            EdgeKind::Lattice {
                crosses_phase: true
            }
        )
    }
}
