//! Topology descriptors for two-phase microstructure samples.
//!
//! Runs the analyses over the contracted graph built by `graspi-core`:
//! per-phase connected component counts, shortest-path distance fields
//! from the interface and boundary face meta-vertices, and the assembly
//! of one fixed-schema [`DescriptorRecord`] per sample, with a
//! rayon-parallel batched entry point on top.

pub mod components;
pub mod descriptors;
pub mod distance;
pub mod record;
pub mod skeleton;

// Re-export commonly used types
pub use components::connected_components;
pub use descriptors::{
    compute_descriptor_batch, compute_descriptors, BatchError, DescriptorConfig,
};
pub use distance::{
    face_distance_stats, interface_distance_stats, DistanceField, DistanceStats,
};
pub use record::DescriptorRecord;
pub use skeleton::{Skeleton, SkeletonBackend};
