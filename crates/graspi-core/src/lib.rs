//! Core graph data model for two-phase microstructure topology.
//!
//! A segmented microstructure (an n-dimensional array of `0`/`1` phase
//! labels) is turned into an undirected graph: one vertex per grid cell
//! with dense row-major ids, full Moore-neighborhood adjacency, and a
//! phase label per vertex. Cross-phase edges are then contracted into an
//! interface meta-vertex (plus optional boundary face meta-vertices), the
//! structure the descriptor analyses in `graspi-descriptors` run over.
//!
//! Construction is a chain of pure stages, each yielding a new value:
//! [`GridGraph::build`] -> [`LabeledGraph::from_grid`] ->
//! [`ContractedGraph::contract`].

pub mod edge;
pub mod error;
pub mod graph;
pub mod grid;
pub mod id;
pub mod offsets;
pub mod vertex;

// Re-export commonly used types
pub use edge::EdgeKind;
pub use error::GraspiError;
pub use graph::{ContractedGraph, ContractionOptions, LabeledGraph};
pub use grid::{Coord, GridGraph, GridTopology};
pub use id::VertexId;
pub use offsets::{half_neighborhood, Offset};
pub use vertex::{BoundaryFace, Phase, Side, VertexKind};
