//! Seam for the external skeletonization collaborator.
//!
//! Skeleton/medial-axis extraction and its geometric descriptors are not
//! part of the graph engine. This module only fixes the interface the
//! engine exchanges data across: a binary mask goes in, a same-shape
//! skeleton mask and distance-to-boundary map come out. Implementations
//! (an external thinning + distance-transform algorithm) live outside this
//! workspace.

use ndarray::{ArrayD, ArrayViewD};

use graspi_core::GraspiError;

/// The result of skeletonizing one binary phase mask.
#[derive(Debug, Clone)]
pub struct Skeleton {
    /// `true` on skeleton pixels; same shape as the input mask.
    pub mask: ArrayD<bool>,
    /// Distance-to-boundary map over the whole grid; same shape as the
    /// input mask.
    pub distance: ArrayD<f64>,
}

/// An external thinning + distance-transform backend.
///
/// The engine never depends on what is behind this trait; it hands a
/// 2D/3D binary array over and consumes the returned mask and map as-is.
pub trait SkeletonBackend {
    /// Skeletonizes a binary phase mask.
    fn skeletonize(&self, mask: ArrayViewD<'_, bool>) -> Result<Skeleton, GraspiError>;
}
