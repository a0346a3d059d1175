//! Vertex records for the microstructure graph.
//!
//! Every vertex carries a fixed-layout [`VertexKind`] stored directly as the
//! petgraph node weight -- a parallel array indexed by the dense vertex id,
//! with no per-vertex property-map lookup. Grid cells carry a [`Phase`];
//! meta-vertices represent the contracted interface or one of the domain
//! boundary faces and have no grid coordinate of their own.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// One of the two material phases of a segmented microstructure.
///
/// Input arrays encode phases as the cell values `0` and `1`; any other
/// value is rejected during labeling rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Phase encoded as `0` in the input array.
    Zero,
    /// Phase encoded as `1` in the input array.
    One,
}

impl Phase {
    /// Both phases, in encoding order.
    pub const ALL: [Phase; 2] = [Phase::Zero, Phase::One];

    /// Converts an input cell value into a phase. Returns `None` for any
    /// value outside `{0, 1}`.
    pub fn from_value(value: u8) -> Option<Phase> {
        match value {
            0 => Some(Phase::Zero),
            1 => Some(Phase::One),
            _ => None,
        }
    }

    /// Returns the cell value this phase is encoded as.
    pub fn value(self) -> u8 {
        match self {
            Phase::Zero => 0,
            Phase::One => 1,
        }
    }

    /// Returns the phase as a `0`/`1` array index.
    pub fn index(self) -> usize {
        self.value() as usize
    }

    /// Returns the other phase.
    pub fn opposite(self) -> Phase {
        match self {
            Phase::Zero => Phase::One,
            Phase::One => Phase::Zero,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// Boundary faces
// ---------------------------------------------------------------------------

/// Which end of an axis a boundary face sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Coordinate `0` along the axis.
    Low,
    /// Coordinate `len - 1` along the axis.
    High,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Low => write!(f, "low"),
            Side::High => write!(f, "high"),
        }
    }
}

/// One of the `2k` domain boundary faces of a k-dimensional grid.
///
/// For 2D grids the conventional names follow the row-major layout of the
/// input array: `top`/`bottom` are the first/last row (axis 0), `left`/
/// `right` the first/last column (axis 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryFace {
    /// The axis perpendicular to the face.
    pub axis: usize,
    /// Which end of the axis the face sits on.
    pub side: Side,
}

impl BoundaryFace {
    /// The face at coordinate `0` along `axis`.
    pub fn low(axis: usize) -> Self {
        BoundaryFace {
            axis,
            side: Side::Low,
        }
    }

    /// The face at coordinate `len - 1` along `axis`.
    pub fn high(axis: usize) -> Self {
        BoundaryFace {
            axis,
            side: Side::High,
        }
    }

    /// First row of a 2D grid.
    pub fn top() -> Self {
        Self::low(0)
    }

    /// Last row of a 2D grid.
    pub fn bottom() -> Self {
        Self::high(0)
    }

    /// First column of a 2D grid.
    pub fn left() -> Self {
        Self::low(1)
    }

    /// Last column of a 2D grid.
    pub fn right() -> Self {
        Self::high(1)
    }

    /// Enumerates all `2k` faces of a k-dimensional grid, low before high,
    /// axis by axis.
    pub fn all(ndim: usize) -> impl Iterator<Item = BoundaryFace> {
        (0..ndim).flat_map(|axis| [Self::low(axis), Self::high(axis)])
    }
}

impl fmt::Display for BoundaryFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis{}/{}", self.axis, self.side)
    }
}

// ---------------------------------------------------------------------------
// Vertex records
// ---------------------------------------------------------------------------

/// The fixed-layout record attached to every vertex.
///
/// Cells correspond to exactly one grid coordinate via the row-major id
/// bijection and are created once at build time. Meta-vertices are created
/// once during contraction, appended after all cells, and never merged
/// further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexKind {
    /// A grid cell carrying a material phase.
    Cell {
        /// The phase label from the input array.
        phase: Phase,
    },
    /// The contracted interface meta-vertex. Its neighbors are the distinct
    /// cells that touched at least one cross-phase edge.
    Interface,
    /// A domain boundary face meta-vertex. Its neighbors are the cells lying
    /// on that face.
    Face(BoundaryFace),
}

impl VertexKind {
    /// Returns the cell phase, or `None` for meta-vertices.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            VertexKind::Cell { phase } => Some(*phase),
            _ => None,
        }
    }

    /// Returns `true` if this vertex is a meta-vertex (no grid coordinate).
    pub fn is_meta(&self) -> bool {
        !matches!(self, VertexKind::Cell { .. })
    }

    /// Returns `true` if this vertex is a cell of the given phase.
    pub fn is_phase(&self, phase: Phase) -> bool {
        self.phase() == Some(phase)
    }
}
