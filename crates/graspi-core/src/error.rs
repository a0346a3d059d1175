//! Core error types for graspi-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Structural
//! errors (`InvalidShape`, `ShapeMismatch`, `InvalidPhaseValue`) abort a
//! whole-sample computation. The per-phase conditions (`EmptyPhase`,
//! `DisconnectedFromInterface`, `DegenerateInterface`) are recoverable:
//! descriptor assembly maps them to explicit not-computable sentinels
//! instead of fabricating a `0` or `NaN`.

use thiserror::Error;

use crate::id::VertexId;
use crate::vertex::{BoundaryFace, Phase};

/// Errors produced by the microstructure graph pipeline.
#[derive(Debug, Error)]
pub enum GraspiError {
    /// A grid shape with no dimensions, or with a zero-length dimension.
    #[error("invalid grid shape {shape:?}: every dimension must be positive")]
    InvalidShape { shape: Vec<usize> },

    /// An array whose shape differs from the one the graph was built for.
    #[error("shape mismatch: graph built for {expected:?}, array has shape {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// An input cell outside the two-phase value set `{0, 1}`.
    #[error("invalid phase value {value} at {coord:?}: cells must be 0 or 1")]
    InvalidPhaseValue { coord: Vec<usize>, value: u8 },

    /// A requested phase has no vertices at all.
    #[error("phase {phase} has no vertices")]
    EmptyPhase { phase: Phase },

    /// A phase with vertices but no path to the interface meta-vertex.
    #[error("phase {phase} is disconnected from the interface")]
    DisconnectedFromInterface { phase: Phase },

    /// A uniform-phase grid: the interface meta-vertex has degree zero and
    /// distance queries from it are undefined.
    #[error("degenerate interface: the grid holds a single phase")]
    DegenerateInterface,

    /// A boundary face meta-vertex that was not built during contraction.
    #[error("boundary face {face} is not present in the contracted graph")]
    MissingBoundaryFace { face: BoundaryFace },

    /// A vertex id outside the graph.
    #[error("vertex not found: VertexId({id})", id = id.0)]
    VertexNotFound { id: VertexId },
}

impl GraspiError {
    /// Returns `true` for the per-phase conditions that descriptor assembly
    /// reports as not-computable sentinels rather than aborting the sample.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GraspiError::EmptyPhase { .. }
                | GraspiError::DisconnectedFromInterface { .. }
                | GraspiError::DegenerateInterface
        )
    }
}
