//! The fixed-schema descriptor record.
//!
//! One record per sample, field names matching the established descriptor
//! vocabulary for two-phase microstructures. Count descriptors are plain
//! integers; distance descriptors are `Option<f64>` where `None` is the
//! explicit not-computable sentinel -- a legitimate `0.0` is never reused
//! to encode a degenerate interface, an absent phase, or a disconnected
//! one. The three cases stay distinguishable inside the schema itself:
//! a zero phase count means the phase is absent, a zero `interfacial_area`
//! means the interface is degenerate, and a `None` distance with both
//! nonzero means the phase is disconnected.
//!
//! Boundary descriptors follow the 2D top/bottom/left/right face naming
//! and are `None` for other dimensionalities or when face meta-vertices
//! were not built.

use serde::{Deserialize, Serialize};

/// Topology descriptors extracted from one two-phase sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorRecord {
    /// Number of cells labeled phase 0.
    pub phase_0_count: usize,
    /// Number of cells labeled phase 1.
    pub phase_1_count: usize,
    /// Connected components within phase 0.
    pub phase_0_cc: usize,
    /// Connected components within phase 1.
    pub phase_1_cc: usize,
    /// Degree of the interface meta-vertex: distinct cells touching at
    /// least one cross-phase adjacency.
    pub interfacial_area: usize,
    /// Interface-touching cells of phase 0.
    pub phase_0_interface: usize,
    /// Interface-touching cells of phase 1.
    pub phase_1_interface: usize,

    /// Mean shortest-path distance to the interface over all cells.
    pub distance_to_interface: Option<f64>,
    /// Same, restricted to phase 0.
    pub distance_to_interface_0: Option<f64>,
    /// Same, restricted to phase 1.
    pub distance_to_interface_1: Option<f64>,

    /// Phase-0 cells on the first row.
    pub top_boundary_count_0: Option<usize>,
    /// Phase-1 cells on the first row.
    pub top_boundary_count_1: Option<usize>,
    /// Phase-0 cells on the last row.
    pub bottom_boundary_count_0: Option<usize>,
    /// Phase-1 cells on the last row.
    pub bottom_boundary_count_1: Option<usize>,
    /// Phase-0 cells on the first column.
    pub left_boundary_count_0: Option<usize>,
    /// Phase-1 cells on the first column.
    pub left_boundary_count_1: Option<usize>,
    /// Phase-0 cells on the last column.
    pub right_boundary_count_0: Option<usize>,
    /// Phase-1 cells on the last column.
    pub right_boundary_count_1: Option<usize>,

    /// Mean distance from the top face to phase-0 cells.
    pub distance_to_top_0: Option<f64>,
    /// Mean distance from the top face to phase-1 cells.
    pub distance_to_top_1: Option<f64>,
    /// Mean distance from the bottom face to phase-0 cells.
    pub distance_to_bottom_0: Option<f64>,
    /// Mean distance from the bottom face to phase-1 cells.
    pub distance_to_bottom_1: Option<f64>,
    /// Mean distance from the left face to phase-0 cells.
    pub distance_to_left_0: Option<f64>,
    /// Mean distance from the left face to phase-1 cells.
    pub distance_to_left_1: Option<f64>,
    /// Mean distance from the right face to phase-0 cells.
    pub distance_to_right_0: Option<f64>,
    /// Mean distance from the right face to phase-1 cells.
    pub distance_to_right_1: Option<f64>,
}

impl DescriptorRecord {
    /// Total number of grid cells the record was computed over.
    pub fn cell_count(&self) -> usize {
        self.phase_0_count + self.phase_1_count
    }
}
