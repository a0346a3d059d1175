//! Half-neighborhood offset generation.
//!
//! Grid adjacency uses the full Moore neighborhood: two cells are adjacent
//! when every coordinate differs by at most one. To emit each undirected
//! edge exactly once, only half of the `3^k - 1` nonzero offsets are
//! generated -- for every antipodal pair `(v, -v)` exactly the member whose
//! first nonzero component is `+1` is kept. Sweeping these offsets from
//! every cell then produces each edge from its lexicographically smaller
//! endpoint and never twice.
//!
//! The rule is a single formula for any dimensionality: 1 offset for k=1,
//! 4 for k=2 (8-connectivity), 13 for k=3 (26-connectivity).

use smallvec::SmallVec;

/// A relative coordinate offset with components in `{-1, 0, 1}`.
///
/// Inline capacity covers the 1D/2D/3D grids this engine is built for;
/// higher dimensionalities spill to the heap and keep working.
pub type Offset = SmallVec<[i8; 3]>;

/// Generates the half Moore neighborhood for a `ndim`-dimensional grid.
///
/// The result is deterministically ordered (lexicographic over components,
/// `-1 < 0 < 1`) and contains `(3^ndim - 1) / 2` offsets: exactly one of
/// each antipodal pair, chosen so the first nonzero component is `+1`.
pub fn half_neighborhood(ndim: usize) -> Vec<Offset> {
    let total = 3usize.pow(ndim as u32);
    let mut offsets = Vec::with_capacity(total / 2);

    for code in 0..total {
        // Decode `code` as ndim base-3 digits, most significant digit first,
        // shifted from {0, 1, 2} to {-1, 0, 1}.
        let mut offset: Offset = SmallVec::from_elem(0, ndim);
        let mut rest = code;
        for axis in (0..ndim).rev() {
            offset[axis] = (rest % 3) as i8 - 1;
            rest /= 3;
        }

        if offset.iter().find(|&&c| c != 0) == Some(&1) {
            offsets.push(offset);
        }
    }

    offsets
}
