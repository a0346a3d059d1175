//! Per-phase connected component counting.
//!
//! After contraction the phases are already isolated from each other --
//! every surviving lattice edge joins two cells of the same phase -- so
//! the component structure of one phase is a closure over that phase's
//! lattice edges alone. Union-find labeling keeps this at `O(V + E)` for
//! the induced subgraph.

use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

use graspi_core::{ContractedGraph, Phase};

/// Counts the connected components of one phase.
///
/// The induced subgraph contains exactly the cells labeled `phase`;
/// meta-vertices and the opposite phase are excluded. An absent phase
/// yields `0` components, not an error.
pub fn connected_components(graph: &ContractedGraph, phase: Phase) -> usize {
    if graph.phase_count(phase) == 0 {
        return 0;
    }

    let g = graph.graph();
    let mut union = UnionFind::<usize>::new(g.node_count());
    for edge in g.edge_references() {
        if !edge.weight().is_lattice() {
            continue;
        }
        if g[edge.source()].is_phase(phase) && g[edge.target()].is_phase(phase) {
            union.union(edge.source().index(), edge.target().index());
        }
    }

    let mut roots = HashSet::new();
    for idx in g.node_indices() {
        if g[idx].is_phase(phase) {
            roots.insert(union.find(idx.index()));
        }
    }
    roots.len()
}
