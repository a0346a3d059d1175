//! Multi-source shortest-path distance fields and their statistics.
//!
//! Distances are unit-weight BFS hop counts from a meta-vertex source.
//! Traversal steps through grid cells only -- other meta-vertices never act
//! as intermediate hops, so a field measures genuine lattice distance to
//! the contracted source and not a shortcut through another star. A field
//! is computed fresh per query; nothing is cached between queries.
//!
//! Statistics aggregate over *reached cells only*, the source excluded.
//! The mean divides by the reached count -- an unreachable phase is
//! excluded, and when that leaves zero samples the condition is surfaced
//! as an error instead of a fabricated `0` or `0/0`.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use graspi_core::{BoundaryFace, ContractedGraph, GraspiError, Phase, VertexId};

// ---------------------------------------------------------------------------
// Distance field
// ---------------------------------------------------------------------------

/// Per-vertex shortest-path distances from one source meta-vertex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceField {
    source: VertexId,
    dist: Vec<Option<u32>>,
}

impl DistanceField {
    /// Runs a breadth-first search from `source` over unit-weight edges.
    ///
    /// With a phase restriction the walk is confined to the subgraph
    /// induced by `{source}` plus the cells of that phase; without one it
    /// may pass through any cell. Meta-vertices other than the source are
    /// never traversed in either mode.
    pub fn from_source(
        graph: &ContractedGraph,
        source: VertexId,
        restriction: Option<Phase>,
    ) -> Result<Self, GraspiError> {
        let g = graph.graph();
        if g.node_weight(source.into()).is_none() {
            return Err(GraspiError::VertexNotFound { id: source });
        }

        let admits = |idx: NodeIndex<u32>| -> bool {
            match restriction {
                Some(phase) => g[idx].is_phase(phase),
                None => !g[idx].is_meta(),
            }
        };

        let mut dist: Vec<Option<u32>> = vec![None; g.node_count()];
        let mut queue = VecDeque::new();
        dist[source.index()] = Some(0);
        queue.push_back(NodeIndex::<u32>::from(source));

        while let Some(current) = queue.pop_front() {
            let next = dist[current.index()].unwrap_or(0) + 1;
            for neighbor in g.neighbors(current) {
                if dist[neighbor.index()].is_none() && admits(neighbor) {
                    dist[neighbor.index()] = Some(next);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(DistanceField { source, dist })
    }

    /// The source this field was computed from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The distance to one vertex, `None` when unreached.
    pub fn get(&self, id: VertexId) -> Option<u32> {
        self.dist.get(id.index()).copied().flatten()
    }

    /// Aggregates the field over reached cells, optionally restricted to
    /// one phase. The source itself never contributes. Returns `None` when
    /// no cell qualifies.
    pub fn stats(&self, graph: &ContractedGraph, phase: Option<Phase>) -> Option<DistanceStats> {
        let g = graph.graph();
        let mut sum = 0u64;
        let mut min = u32::MAX;
        let mut max = 0u32;
        let mut reached = 0usize;

        for id in 0..graph.cell_count() {
            if id == self.source.index() {
                continue;
            }
            if let Some(want) = phase {
                if !g[NodeIndex::<u32>::new(id)].is_phase(want) {
                    continue;
                }
            }
            if let Some(d) = self.dist[id] {
                sum += u64::from(d);
                min = min.min(d);
                max = max.max(d);
                reached += 1;
            }
        }

        if reached == 0 {
            return None;
        }
        Some(DistanceStats {
            mean: sum as f64 / reached as f64,
            min,
            max,
            reached,
        })
    }
}

/// Summary statistics of one distance field over the reached cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceStats {
    /// Mean distance over reached cells.
    pub mean: f64,
    /// Smallest reached distance (always >= 1).
    pub min: u32,
    /// Largest reached distance.
    pub max: u32,
    /// Number of cells the aggregate ran over.
    pub reached: usize,
}

// ---------------------------------------------------------------------------
// Descriptor queries
// ---------------------------------------------------------------------------

/// Distance statistics from the interface meta-vertex.
///
/// Errors: [`GraspiError::DegenerateInterface`] on a uniform grid,
/// [`GraspiError::EmptyPhase`] when the restricted phase has no cells,
/// [`GraspiError::DisconnectedFromInterface`] when it has cells but none
/// are reachable.
pub fn interface_distance_stats(
    graph: &ContractedGraph,
    restriction: Option<Phase>,
) -> Result<DistanceStats, GraspiError> {
    if graph.interfacial_area() == 0 {
        return Err(GraspiError::DegenerateInterface);
    }
    if let Some(phase) = restriction {
        if graph.phase_count(phase) == 0 {
            return Err(GraspiError::EmptyPhase { phase });
        }
    }

    let field = DistanceField::from_source(graph, graph.interface_vertex(), restriction)?;
    field.stats(graph, restriction).ok_or_else(|| {
        // Only a restricted query can come up empty: an interface with
        // nonzero degree reaches at least its own members.
        GraspiError::DisconnectedFromInterface {
            phase: restriction.unwrap_or(Phase::Zero),
        }
    })
}

/// Distance statistics from one boundary face meta-vertex, aggregated over
/// the cells of one phase. The walk itself is unrestricted.
pub fn face_distance_stats(
    graph: &ContractedGraph,
    face: BoundaryFace,
    phase: Phase,
) -> Result<DistanceStats, GraspiError> {
    let source = graph
        .face_vertex(face)
        .ok_or(GraspiError::MissingBoundaryFace { face })?;
    if graph.phase_count(phase) == 0 {
        return Err(GraspiError::EmptyPhase { phase });
    }

    let field = DistanceField::from_source(graph, source, None)?;
    field
        .stats(graph, Some(phase))
        .ok_or(GraspiError::DisconnectedFromInterface { phase })
}

#[cfg(test)]
mod tests {
    use super::*;
    use graspi_core::{ContractionOptions, LabeledGraph};
    use ndarray::{array, Array2};

    fn contracted(data: Array2<u8>) -> ContractedGraph {
        let view = data.view().into_dyn();
        let labeled = LabeledGraph::from_array(&view).unwrap();
        ContractedGraph::contract(&labeled, &ContractionOptions::default())
    }

    #[test]
    fn center_stripe_is_all_adjacent_to_the_interface() {
        let g = contracted(array![[0, 0, 0], [1, 1, 1], [0, 0, 0]]);
        for restriction in [None, Some(Phase::Zero), Some(Phase::One)] {
            let stats = interface_distance_stats(&g, restriction).unwrap();
            assert_eq!(stats.mean, 1.0);
            assert_eq!(stats.min, 1);
            assert_eq!(stats.max, 1);
        }
        assert_eq!(
            interface_distance_stats(&g, None).unwrap().reached,
            9
        );
    }

    #[test]
    fn column_stripes_have_depth_two() {
        // Single column, phases 0,0,1,1: the interface sits between rows
        // 1 and 2 and the outer cells are two hops away.
        let g = contracted(array![[0], [0], [1], [1]]);
        assert_eq!(g.interfacial_area(), 2);

        let all = interface_distance_stats(&g, None).unwrap();
        assert_eq!(all.reached, 4);
        assert_eq!(all.mean, 1.5);
        assert_eq!((all.min, all.max), (1, 2));

        let zero = interface_distance_stats(&g, Some(Phase::Zero)).unwrap();
        assert_eq!(zero.reached, 2);
        assert_eq!(zero.mean, 1.5);
    }

    #[test]
    fn restricted_field_leaves_the_other_phase_unreached() {
        let g = contracted(array![[0], [0], [1], [1]]);
        let field =
            DistanceField::from_source(&g, g.interface_vertex(), Some(Phase::Zero)).unwrap();
        assert_eq!(field.get(VertexId(0)), Some(2));
        assert_eq!(field.get(VertexId(1)), Some(1));
        assert_eq!(field.get(VertexId(2)), None);
        assert_eq!(field.get(VertexId(3)), None);
    }

    #[test]
    fn the_source_reports_distance_zero_but_is_excluded_from_stats() {
        let g = contracted(array![[0, 1]]);
        let field = DistanceField::from_source(&g, g.interface_vertex(), None).unwrap();
        assert_eq!(field.get(g.interface_vertex()), Some(0));

        let stats = field.stats(&g, None).unwrap();
        assert_eq!(stats.reached, 2);
        assert_eq!(stats.min, 1);
    }

    #[test]
    fn uniform_grid_is_degenerate() {
        let g = contracted(Array2::zeros((3, 3)));
        assert!(matches!(
            interface_distance_stats(&g, None),
            Err(GraspiError::DegenerateInterface)
        ));
        assert!(matches!(
            interface_distance_stats(&g, Some(Phase::Zero)),
            Err(GraspiError::DegenerateInterface)
        ));
    }

    #[test]
    fn unknown_source_is_rejected() {
        let g = contracted(array![[0, 1]]);
        assert!(matches!(
            DistanceField::from_source(&g, VertexId(99), None),
            Err(GraspiError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn face_distances_sweep_across_the_grid() {
        let g = contracted(array![[0, 0, 0], [1, 1, 1], [0, 0, 0]]);
        let top0 = face_distance_stats(&g, BoundaryFace::top(), Phase::Zero).unwrap();
        // Phase 0 occupies rows 0 and 2: three cells one hop from the top
        // face, three cells three hops away.
        assert_eq!(top0.mean, 2.0);
        assert_eq!((top0.min, top0.max), (1, 3));

        let top1 = face_distance_stats(&g, BoundaryFace::top(), Phase::One).unwrap();
        assert_eq!(top1.mean, 2.0);
        assert_eq!((top1.min, top1.max), (2, 2));

        let left0 = face_distance_stats(&g, BoundaryFace::left(), Phase::Zero).unwrap();
        assert_eq!(left0.mean, 2.0);
        assert_eq!((left0.min, left0.max), (1, 3));
    }

    #[test]
    fn face_distances_for_an_absent_phase_are_empty() {
        let g = contracted(Array2::zeros((2, 2)));
        assert!(matches!(
            face_distance_stats(&g, BoundaryFace::top(), Phase::One),
            Err(GraspiError::EmptyPhase { phase: Phase::One })
        ));
    }

    #[test]
    fn missing_face_is_an_explicit_error() {
        let data: Array2<u8> = array![[0, 1], [0, 1]];
        let view = data.view().into_dyn();
        let labeled = LabeledGraph::from_array(&view).unwrap();
        let g = ContractedGraph::contract(
            &labeled,
            &ContractionOptions {
                boundary_faces: false,
            },
        );
        assert!(matches!(
            face_distance_stats(&g, BoundaryFace::top(), Phase::Zero),
            Err(GraspiError::MissingBoundaryFace { .. })
        ));
    }
}
