//! Grid topology and base graph construction.
//!
//! [`GridTopology`] owns the bijection between n-dimensional grid
//! coordinates and dense integer vertex ids (row-major order, fixed for the
//! lifetime of one graph). [`GridGraph`] applies the half-neighborhood
//! offsets to every coordinate with boundary clipping and emits the
//! deduplicated undirected edge set over `N = prod(shape)` vertices.

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::GraspiError;
use crate::offsets::{half_neighborhood, Offset};
use crate::vertex::{BoundaryFace, Side};

/// A grid coordinate tuple.
pub type Coord = SmallVec<[usize; 3]>;

// ---------------------------------------------------------------------------
// Topology
// ---------------------------------------------------------------------------

/// The shape of a regular grid and its row-major coordinate/id bijection.
///
/// Built once per sample and read-only thereafter; every graph stage shares
/// the same mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTopology {
    shape: SmallVec<[usize; 3]>,
    len: usize,
}

impl GridTopology {
    /// Validates a grid shape. A shape with no dimensions or with any
    /// zero-length dimension is rejected.
    pub fn new(shape: &[usize]) -> Result<Self, GraspiError> {
        if shape.is_empty() || shape.iter().any(|&d| d == 0) {
            return Err(GraspiError::InvalidShape {
                shape: shape.to_vec(),
            });
        }
        Ok(GridTopology {
            shape: SmallVec::from_slice(shape),
            len: shape.iter().product(),
        })
    }

    /// The grid dimensionality `k`.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// The grid shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of grid cells, `prod(shape)`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: zero-length dimensions are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps a coordinate to its dense row-major id.
    pub fn flatten(&self, coord: &[usize]) -> usize {
        debug_assert_eq!(coord.len(), self.ndim());
        coord
            .iter()
            .zip(&self.shape)
            .fold(0, |acc, (&c, &d)| acc * d + c)
    }

    /// Maps a dense id back to its coordinate.
    pub fn unflatten(&self, id: usize) -> Coord {
        debug_assert!(id < self.len);
        let mut coord: Coord = SmallVec::from_elem(0, self.ndim());
        let mut rest = id;
        for axis in (0..self.ndim()).rev() {
            coord[axis] = rest % self.shape[axis];
            rest /= self.shape[axis];
        }
        coord
    }

    /// Applies an offset to a coordinate, returning the neighbor's dense id
    /// or `None` when the result leaves the grid along any axis.
    pub fn checked_neighbor(&self, coord: &[usize], offset: &Offset) -> Option<usize> {
        let mut neighbor: Coord = SmallVec::with_capacity(self.ndim());
        for axis in 0..self.ndim() {
            let c = coord[axis] as isize + offset[axis] as isize;
            if c < 0 || c >= self.shape[axis] as isize {
                return None;
            }
            neighbor.push(c as usize);
        }
        Some(self.flatten(&neighbor))
    }

    /// The dense ids of every cell on a boundary face, in id order.
    pub fn face_ids(&self, face: BoundaryFace) -> Vec<usize> {
        debug_assert!(face.axis < self.ndim());
        let edge = match face.side {
            Side::Low => 0,
            Side::High => self.shape[face.axis] - 1,
        };
        (0..self.len)
            .filter(|&id| self.unflatten(id)[face.axis] == edge)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Base graph
// ---------------------------------------------------------------------------

/// The unlabeled grid adjacency graph.
///
/// Vertices occupy the dense ids `0..N-1` in row-major order; edges are the
/// full-connectivity Moore adjacencies, each present exactly once. Phase
/// labels are attached by the next pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridGraph {
    graph: UnGraph<(), ()>,
    topology: GridTopology,
}

impl GridGraph {
    /// Builds the adjacency graph for a grid of the given shape.
    ///
    /// Runs in `O(N * |offsets|)`; the half-neighborhood sweep guarantees no
    /// duplicate undirected edges and no self loops without any dedup pass.
    pub fn build(shape: &[usize]) -> Result<Self, GraspiError> {
        let topology = GridTopology::new(shape)?;
        let offsets = half_neighborhood(topology.ndim());

        let mut graph =
            UnGraph::with_capacity(topology.len(), topology.len() * offsets.len());
        for _ in 0..topology.len() {
            graph.add_node(());
        }
        for id in 0..topology.len() {
            let coord = topology.unflatten(id);
            for offset in &offsets {
                if let Some(neighbor) = topology.checked_neighbor(&coord, offset) {
                    graph.add_edge(NodeIndex::new(id), NodeIndex::new(neighbor), ());
                }
            }
        }

        log::debug!(
            "built grid graph: shape {:?}, {} vertices, {} edges",
            topology.shape(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(GridGraph { graph, topology })
    }

    /// Read-only access to the underlying adjacency structure.
    pub fn graph(&self) -> &UnGraph<(), ()> {
        &self.graph
    }

    /// The coordinate/id bijection this graph was built over.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Number of grid vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected grid edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
