//! Labeled and contracted microstructure graphs.
//!
//! The pipeline is a chain of pure transformations, each producing a new
//! structure rather than mutating shared state:
//!
//! ```text
//! GridGraph::build(shape)          topology only
//!   -> LabeledGraph::from_grid     phase per cell, crosses_phase per edge
//!   -> ContractedGraph::contract   cross-phase edges replaced by meta-vertices
//! ```
//!
//! [`ContractedGraph`] is the structure the descriptor analyses run over.
//! Its invariant: no two adjacent non-meta vertices disagree in phase --
//! all phase disagreement is mediated through the interface meta-vertex.

use indexmap::IndexSet;
use ndarray::{ArrayViewD, Dimension};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::edge::EdgeKind;
use crate::error::GraspiError;
use crate::grid::{GridGraph, GridTopology};
use crate::id::VertexId;
use crate::vertex::{BoundaryFace, Phase, VertexKind};

// ---------------------------------------------------------------------------
// Labeled graph
// ---------------------------------------------------------------------------

/// The grid graph with a phase attached to every vertex.
///
/// Vertex ids and adjacency are identical to the [`GridGraph`] it was
/// labeled from; each lattice edge additionally records whether its
/// endpoints disagree in phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledGraph {
    graph: UnGraph<VertexKind, EdgeKind>,
    topology: GridTopology,
    phase_counts: [usize; 2],
}

impl LabeledGraph {
    /// Builds the grid graph for the array's shape and labels it in one
    /// step. This is the usual entry point for one sample.
    pub fn from_array(view: &ArrayViewD<'_, u8>) -> Result<Self, GraspiError> {
        let grid = GridGraph::build(view.shape())?;
        Self::from_grid(&grid, view)
    }

    /// Labels an already-built grid graph with the array's phase values.
    ///
    /// The array must have the exact shape the graph was built for. Any
    /// cell value outside `{0, 1}` aborts with the offending coordinate --
    /// values are never silently coerced.
    pub fn from_grid(grid: &GridGraph, view: &ArrayViewD<'_, u8>) -> Result<Self, GraspiError> {
        let topology = grid.topology().clone();
        if view.shape() != topology.shape() {
            return Err(GraspiError::ShapeMismatch {
                expected: topology.shape().to_vec(),
                actual: view.shape().to_vec(),
            });
        }

        // Cells come out of `indexed_iter` in logical row-major order, the
        // same order the dense ids were assigned in.
        let mut phases = Vec::with_capacity(topology.len());
        let mut phase_counts = [0usize; 2];
        for (coord, &value) in view.indexed_iter() {
            let phase = Phase::from_value(value).ok_or_else(|| GraspiError::InvalidPhaseValue {
                coord: coord.slice().to_vec(),
                value,
            })?;
            phase_counts[phase.index()] += 1;
            phases.push(phase);
        }

        let mut graph =
            UnGraph::with_capacity(topology.len(), grid.edge_count());
        for &phase in &phases {
            graph.add_node(VertexKind::Cell { phase });
        }
        for edge in grid.graph().edge_references() {
            let (a, b) = (edge.source(), edge.target());
            let crosses_phase = phases[a.index()] != phases[b.index()];
            graph.add_edge(a, b, EdgeKind::Lattice { crosses_phase });
        }

        log::debug!(
            "labeled graph: {} cells of phase 0, {} of phase 1",
            phase_counts[0],
            phase_counts[1]
        );
        Ok(LabeledGraph {
            graph,
            topology,
            phase_counts,
        })
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Read-only access to the underlying labeled adjacency structure.
    pub fn graph(&self) -> &UnGraph<VertexKind, EdgeKind> {
        &self.graph
    }

    /// The coordinate/id bijection this graph was built over.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of cells labeled with the given phase.
    pub fn phase_count(&self, phase: Phase) -> usize {
        self.phase_counts[phase.index()]
    }

    /// The phase of a cell, or `None` for ids outside the graph.
    pub fn phase(&self, id: VertexId) -> Option<Phase> {
        self.graph
            .node_weight(id.into())
            .and_then(VertexKind::phase)
    }
}

// ---------------------------------------------------------------------------
// Contraction
// ---------------------------------------------------------------------------

/// Options for interface contraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractionOptions {
    /// Also build one meta-vertex per domain boundary face (`2k` of them),
    /// wired to every cell on that face. Required for the boundary-distance
    /// descriptors.
    pub boundary_faces: bool,
}

impl Default for ContractionOptions {
    fn default() -> Self {
        ContractionOptions {
            boundary_faces: true,
        }
    }
}

/// The contracted microstructure graph.
///
/// All cross-phase lattice edges are gone; every former cross-phase
/// endpoint is linked exactly once to the interface meta-vertex, regardless
/// of how many crossing edges it touched. Meta-vertices occupy the ids
/// after the `N` grid cells: the interface first, then the boundary faces
/// in axis order when enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractedGraph {
    graph: UnGraph<VertexKind, EdgeKind>,
    topology: GridTopology,
    phase_counts: [usize; 2],
    interface: VertexId,
    interface_counts: [usize; 2],
    faces: Vec<(BoundaryFace, VertexId)>,
}

impl ContractedGraph {
    /// Contracts all cross-phase edges of a labeled graph into the
    /// interface meta-vertex.
    ///
    /// The labeled graph is left untouched; the result is a fresh
    /// structure. A uniform-phase grid yields a degree-0 interface
    /// meta-vertex -- distance queries from it surface
    /// [`GraspiError::DegenerateInterface`] instead of fabricating values.
    pub fn contract(labeled: &LabeledGraph, options: &ContractionOptions) -> Self {
        let topology = labeled.topology().clone();
        let cells = labeled.cell_count();

        let mut graph = UnGraph::with_capacity(cells + 1, labeled.graph().edge_count());
        for idx in labeled.graph().node_indices() {
            graph.add_node(labeled.graph()[idx]);
        }

        // Partition lattice edges: keep same-phase, record the distinct
        // endpoints of cross-phase ones. The IndexSet both deduplicates and
        // fixes a deterministic wiring order.
        let mut members: IndexSet<NodeIndex<u32>> = IndexSet::new();
        let mut crossing = 0usize;
        for edge in labeled.graph().edge_references() {
            if edge.weight().crosses_phase() {
                crossing += 1;
                members.insert(edge.source());
                members.insert(edge.target());
            } else {
                graph.add_edge(edge.source(), edge.target(), *edge.weight());
            }
        }

        let interface = graph.add_node(VertexKind::Interface);
        let mut interface_counts = [0usize; 2];
        for &member in &members {
            if let Some(phase) = graph[member].phase() {
                interface_counts[phase.index()] += 1;
            }
            graph.add_edge(member, interface, EdgeKind::InterfaceLink);
        }
        log::debug!(
            "contracted {} crossing edges into an interface of degree {}",
            crossing,
            members.len()
        );

        let mut faces = Vec::new();
        if options.boundary_faces {
            for face in BoundaryFace::all(topology.ndim()) {
                let meta = graph.add_node(VertexKind::Face(face));
                for id in topology.face_ids(face) {
                    graph.add_edge(NodeIndex::new(id), meta, EdgeKind::FaceLink);
                }
                faces.push((face, VertexId::from(meta)));
            }
        }

        let contracted = ContractedGraph {
            graph,
            topology,
            phase_counts: [
                labeled.phase_count(Phase::Zero),
                labeled.phase_count(Phase::One),
            ],
            interface: VertexId::from(interface),
            interface_counts,
            faces,
        };
        #[cfg(debug_assertions)]
        contracted.assert_contracted();
        contracted
    }

    /// Checks the contraction invariant: no lattice edge still crosses
    /// phases, and the interface degree matches the recorded member counts.
    #[cfg(debug_assertions)]
    fn assert_contracted(&self) {
        for edge in self.graph.edge_references() {
            debug_assert!(!edge.weight().crosses_phase());
        }
        let degree = self
            .graph
            .neighbors(self.interface.into())
            .count();
        debug_assert_eq!(degree, self.interfacial_area());
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Read-only access to the contracted adjacency structure.
    pub fn graph(&self) -> &UnGraph<VertexKind, EdgeKind> {
        &self.graph
    }

    /// The coordinate/id bijection this graph was built over.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Number of grid cells (meta-vertices excluded).
    pub fn cell_count(&self) -> usize {
        self.topology.len()
    }

    /// Number of cells labeled with the given phase.
    pub fn phase_count(&self, phase: Phase) -> usize {
        self.phase_counts[phase.index()]
    }

    /// The interface meta-vertex.
    pub fn interface_vertex(&self) -> VertexId {
        self.interface
    }

    /// The interfacial area: the degree of the interface meta-vertex, i.e.
    /// the number of distinct cells that touched a cross-phase edge.
    pub fn interfacial_area(&self) -> usize {
        self.interface_counts[0] + self.interface_counts[1]
    }

    /// Number of interface-touching cells of one phase.
    pub fn interface_count(&self, phase: Phase) -> usize {
        self.interface_counts[phase.index()]
    }

    /// The boundary face meta-vertices, in construction order. Empty when
    /// contraction ran without [`ContractionOptions::boundary_faces`].
    pub fn faces(&self) -> &[(BoundaryFace, VertexId)] {
        &self.faces
    }

    /// Looks up the meta-vertex of one boundary face.
    pub fn face_vertex(&self, face: BoundaryFace) -> Option<VertexId> {
        self.faces
            .iter()
            .find(|(f, _)| *f == face)
            .map(|&(_, id)| id)
    }

    /// Number of cells of one phase lying on a boundary face. Computed from
    /// the topology, so it works whether or not face meta-vertices exist.
    pub fn boundary_count(&self, face: BoundaryFace, phase: Phase) -> usize {
        self.topology
            .face_ids(face)
            .into_iter()
            .filter(|&id| self.graph[NodeIndex::new(id)].is_phase(phase))
            .count()
    }

    /// The record of any vertex, cell or meta.
    pub fn vertex_kind(&self, id: VertexId) -> Option<&VertexKind> {
        self.graph.node_weight(id.into())
    }
}
